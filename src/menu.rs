// src/menu.rs
//! Launching the rofi picker.

use crate::dispatch::AlternateKey;
use crate::error::{AppError, Result};
use crate::process::run_tool;
use crate::types::CandidateSet;

/// Everything the picker is shown for one run.
#[derive(Debug, Clone, Default)]
pub struct MenuRequest {
    pub prompt: String,
    pub candidates: CandidateSet,
    /// Line shown above the list, e.g. the recent entries.
    pub message: Option<String>,
    pub extra_args: Vec<String>,
}

/// What the picker reported back, unprocessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuResponse {
    pub status: i32,
    pub stdout: String,
}

/// Shows a menu and blocks until the user answers.
pub trait MenuLauncher {
    fn show(&self, request: &MenuRequest) -> Result<MenuResponse>;
}

/// The rofi dmenu-mode picker.
#[derive(Debug, Clone)]
pub struct RofiLauncher {
    program: String,
}

impl Default for RofiLauncher {
    fn default() -> Self {
        Self::new("rofi")
    }
}

impl RofiLauncher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MenuLauncher for RofiLauncher {
    fn show(&self, request: &MenuRequest) -> Result<MenuResponse> {
        let args = picker_arguments(request);
        log::info!(
            "Showing {} candidates in {}",
            request.candidates.len(),
            self.program
        );

        let stdin = request.candidates.to_stdin();
        let output = run_tool(&self.program, &args, Some(stdin.as_str()))?;
        let status = output.status.code().ok_or(AppError::PickerTerminated)?;

        log::debug!("{} exited with status {}", self.program, status);
        if !output.stderr.trim().is_empty() {
            log::debug!("{} stderr: {}", self.program, output.stderr.trim());
        }

        Ok(MenuResponse {
            status,
            stdout: output.stdout,
        })
    }
}

/// Builds the rofi command line for `request`.
pub fn picker_arguments(request: &MenuRequest) -> Vec<String> {
    let mut args: Vec<String> = [
        "-dmenu",
        "-markup-rows",
        "-i",
        "-multi-select",
        "-p",
        request.prompt.as_str(),
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for key in AlternateKey::ALL {
        args.push(format!("-kb-custom-{}", key.slot()));
        args.push(key.chord().to_string());
    }

    if let Some(message) = request.message.as_ref().filter(|m| !m.is_empty()) {
        args.push("-mesg".to_string());
        args.push(message.clone());
    }

    args.extend(request.extra_args.iter().cloned());
    args
}

/// Formats recent entries for the message bar: `1: a | 2: b | ... | 0: j`.
///
/// The digits match the Alt+digit keys that select each entry.
pub fn format_recent_message(entries: &[String]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}: {}", (index + 1) % 10, entry))
        .collect::<Vec<_>>()
        .join(" | ")
}
