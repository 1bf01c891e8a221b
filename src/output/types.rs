// src/output/types.rs
//! Type definitions for delivery.

use std::fmt;

/// How a payload reaches the focused application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Type the payload as keystrokes.
    #[default]
    Type,
    /// Put the payload on the clipboard only.
    Copy,
    /// Put the payload on the clipboard, paste it, then put back what the
    /// clipboard held before.
    CopyPasteRestore,
}

impl DeliveryMode {
    /// Resolves the mode from the two command-line switches; copy-only wins.
    pub fn from_flags(copy_only: bool, insert_with_clipboard: bool) -> Self {
        if copy_only {
            DeliveryMode::Copy
        } else if insert_with_clipboard {
            DeliveryMode::CopyPasteRestore
        } else {
            DeliveryMode::Type
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryMode::Type => write!(f, "type"),
            DeliveryMode::Copy => write!(f, "copy"),
            DeliveryMode::CopyPasteRestore => write!(f, "copy-paste-restore"),
        }
    }
}

/// Result of a completed delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub mode: DeliveryMode,
    pub chars_delivered: usize,
    pub duration_ms: u64,
}
