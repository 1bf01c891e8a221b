// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use crate::constants::RECENT_CEILING;
use std::fmt;

/// The text ultimately delivered to the focused application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field separator splitting a picker line into payload and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    /// Create a new separator with validation
    pub fn new(separator: impl Into<String>) -> Result<Self, ValidationError> {
        let separator = separator.into();

        if separator.is_empty() {
            return Err(ValidationError::EmptyField("separator"));
        }

        if separator.contains('\n') {
            return Err(ValidationError::InvalidSeparator {
                separator,
                reason: "a separator cannot span lines".to_string(),
            });
        }

        Ok(Self(separator))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part of `line` before the first separator, or the whole
    /// line when the separator does not occur.
    pub fn payload_of<'a>(&self, line: &'a str) -> &'a str {
        line.split_once(self.0.as_str())
            .map_or(line, |(payload, _)| payload)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Number of recent entries to keep, clamped to [`RECENT_CEILING`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecentLimit(usize);

impl RecentLimit {
    /// Clamps silently; callers that want to warn compare with
    /// [`RecentLimit::was_clamped`].
    pub fn new(requested: usize) -> Self {
        Self(requested.min(RECENT_CEILING))
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn was_clamped(requested: usize) -> bool {
        requested > RECENT_CEILING
    }
}

impl Default for RecentLimit {
    fn default() -> Self {
        Self(RECENT_CEILING)
    }
}

/// Opaque reference to the window that had focus when the run began.
///
/// Typing tools that cannot address windows produce [`ActiveWindow::unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveWindow(Option<String>);

impl ActiveWindow {
    pub fn new(id: impl Into<String>) -> Self {
        Self(Some(id.into()))
    }

    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl fmt::Display for ActiveWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(id) => write!(f, "window {}", id),
            None => write!(f, "focused window"),
        }
    }
}

/// Ordered display lines fed to the picker for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    lines: Vec<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.extend(lines);
        set
    }

    /// Appends lines, dropping trailing carriage returns.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(|line| {
            let mut line = line.into();
            if line.ends_with('\r') {
                line.pop();
            }
            line
        }));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the set as picker standard input: one line each, newline
    /// terminated.
    pub fn to_stdin(&self) -> String {
        let mut input = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            input.push_str(line);
            input.push('\n');
        }
        input
    }
}
