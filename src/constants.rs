// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Reading these constants should tell you how a selection travels: which
//! exit codes the picker speaks, which keys produce them, and how much
//! history survives between runs.

// ---------------------------------------------------------------------------
// Picker exit-code protocol
// ---------------------------------------------------------------------------

/// Exit status rofi reports when the user accepts a line with Enter.
pub const EXIT_ACCEPT: i32 = 0;

/// Exit status rofi reports when the user cancels with Escape.
pub const EXIT_CANCEL: i32 = 1;

/// First exit status of the recent-entry keys (`kb-custom-1`, Alt+1).
///
/// rofi maps `kb-custom-N` to exit status `9 + N`.
pub const EXIT_RECENT_FIRST: i32 = 10;

/// Last exit status of the recent-entry keys (`kb-custom-10`, Alt+0).
pub const EXIT_RECENT_LAST: i32 = 19;

/// Exit status of the first alternate-delivery key (`kb-custom-11`).
pub const EXIT_ALTERNATE_FIRST: i32 = 20;

/// Exit status of the last alternate-delivery key (`kb-custom-15`).
pub const EXIT_ALTERNATE_LAST: i32 = 24;

// ---------------------------------------------------------------------------
// Recent history
// ---------------------------------------------------------------------------

/// Hard ceiling on remembered entries.
///
/// Recent entries are reachable only through the ten `kb-custom-1..10`
/// keys, so an eleventh entry could never be selected.
pub const RECENT_CEILING: usize = 10;

/// Default number of recent entries kept and shown.
pub const DEFAULT_MAX_RECENT: usize = 10;

/// Directory under the XDG data home holding the recent file.
pub const DATA_DIR_NAME: &str = "rofi-generic";

/// File name of the committed recent list.
pub const RECENT_FILE_NAME: &str = "recent";

/// File name the next recent list is written to before it is renamed.
pub const RECENT_TEMP_FILE_NAME: &str = "recent_temp";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Name of the rc file searched for in every XDG config directory.
pub const RC_FILE_NAME: &str = "rofigeneric.rc";

/// Default field separator between the payload and its description.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Default picker prompt.
pub const DEFAULT_PROMPT: &str = "😀 ";

// ---------------------------------------------------------------------------
// Delivery timing
// ---------------------------------------------------------------------------

/// Pause between pasting and restoring the clipboard, in milliseconds.
///
/// The target application reads the clipboard asynchronously after the
/// paste keystroke; restoring too early pastes the old value.
pub const PASTE_SETTLE_MS: u64 = 50;
