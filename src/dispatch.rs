// src/dispatch.rs
//! Turns the picker's exit status and output into a delivery decision.
//!
//! rofi reports *how* a line was accepted only through its exit status.
//! [`classify_exit`] is the single table translating those numbers; the
//! rest of this module never looks at a raw status again.

use crate::constants::{
    EXIT_ACCEPT, EXIT_ALTERNATE_FIRST, EXIT_ALTERNATE_LAST, EXIT_CANCEL, EXIT_RECENT_FIRST,
    EXIT_RECENT_LAST,
};
use crate::error::{AppError, Result};
use crate::menu::MenuResponse;
use crate::types::{Payload, Separator};
use std::fmt;

/// Keys bound to `kb-custom-11..15`. Recognised, but not routed anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternateKey {
    /// Alt+c: copy only.
    Copy,
    /// Alt+t: type only.
    Type,
    /// Alt+p: copy, paste, restore.
    CopyPaste,
    /// Alt+u: deliver the codepoints instead of the text.
    Codepoints,
    /// Alt+i: copy the codepoints.
    CopyCodepoints,
}

impl AlternateKey {
    pub const ALL: [AlternateKey; 5] = [
        AlternateKey::Copy,
        AlternateKey::Type,
        AlternateKey::CopyPaste,
        AlternateKey::Codepoints,
        AlternateKey::CopyCodepoints,
    ];

    /// The rofi key chord registered for this action.
    pub fn chord(self) -> &'static str {
        match self {
            AlternateKey::Copy => "Alt+c",
            AlternateKey::Type => "Alt+t",
            AlternateKey::CopyPaste => "Alt+p",
            AlternateKey::Codepoints => "Alt+u",
            AlternateKey::CopyCodepoints => "Alt+i",
        }
    }

    /// The `kb-custom-N` slot the chord is registered at.
    pub fn slot(self) -> u8 {
        match self {
            AlternateKey::Copy => 11,
            AlternateKey::Type => 12,
            AlternateKey::CopyPaste => 13,
            AlternateKey::Codepoints => 14,
            AlternateKey::CopyCodepoints => 15,
        }
    }
}

impl fmt::Display for AlternateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlternateKey::Copy => "copy",
            AlternateKey::Type => "type",
            AlternateKey::CopyPaste => "copy-paste",
            AlternateKey::Codepoints => "codepoints",
            AlternateKey::CopyCodepoints => "copy-codepoints",
        };
        write!(f, "{} ({})", name, self.chord())
    }
}

/// What an exit status asks for, before the output is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAction {
    Cancel,
    Accept,
    /// 1-based position in the recent list.
    Recent(usize),
    Alternate(AlternateKey),
    Unknown(i32),
}

/// Maps a picker exit status onto an [`ExitAction`].
pub fn classify_exit(status: i32) -> ExitAction {
    match status {
        EXIT_CANCEL => ExitAction::Cancel,
        EXIT_ACCEPT => ExitAction::Accept,
        EXIT_RECENT_FIRST..=EXIT_RECENT_LAST => {
            ExitAction::Recent((status - EXIT_RECENT_FIRST + 1) as usize)
        }
        EXIT_ALTERNATE_FIRST..=EXIT_ALTERNATE_LAST => {
            ExitAction::Alternate(AlternateKey::ALL[(status - EXIT_ALTERNATE_FIRST) as usize])
        }
        other => ExitAction::Unknown(other),
    }
}

/// The hand-off between the picker side and the delivery side of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Abort,
    DeliverPayload(Payload),
    DeliverRecent(usize),
    /// Accepted but unrouted: nothing is delivered.
    Ignored { status: i32 },
}

/// Resolves a picker response into a [`DispatchOutcome`].
///
/// Only an accepted line reads the output, and it must be exactly one line.
pub fn dispatch(response: &MenuResponse, separator: &Separator) -> Result<DispatchOutcome> {
    match classify_exit(response.status) {
        ExitAction::Cancel => Ok(DispatchOutcome::Abort),
        ExitAction::Accept => {
            let line = single_line(&response.stdout)?;
            Ok(DispatchOutcome::DeliverPayload(Payload::new(
                separator.payload_of(line),
            )))
        }
        ExitAction::Recent(position) => Ok(DispatchOutcome::DeliverRecent(position)),
        ExitAction::Alternate(key) => {
            log::warn!("The {} key is not supported yet; nothing delivered", key);
            Ok(DispatchOutcome::Ignored {
                status: response.status,
            })
        }
        ExitAction::Unknown(status) => {
            log::warn!("Picker exited with unexpected status {}; ignoring", status);
            Ok(DispatchOutcome::Ignored { status })
        }
    }
}

fn single_line(stdout: &str) -> Result<&str> {
    let mut lines = stdout.lines();
    match (lines.next(), lines.next()) {
        (Some(line), None) => Ok(line),
        (None, _) => Err(AppError::ProtocolViolation(
            "picker accepted a selection but printed nothing".to_string(),
        )),
        (Some(_), Some(_)) => Err(AppError::ProtocolViolation(format!(
            "expected exactly one selected line, got {}",
            stdout.lines().count()
        ))),
    }
}
