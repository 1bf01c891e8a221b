// src/output/typer.rs
//! Synthetic keystrokes through xdotool (X11) or wtype (Wayland).

use crate::error::Result;
use crate::process::{is_on_path, is_wayland_session, run_checked};
use crate::types::{ActiveWindow, ValidationError};
use std::str::FromStr;

/// Types text into, and pastes into, the focused application.
pub trait Typer {
    fn name(&self) -> &'static str;

    /// Captures the window that currently has focus.
    fn active_window(&self) -> Result<ActiveWindow>;

    fn type_text(&self, text: &str, window: &ActiveWindow) -> Result<()>;

    /// Sends the paste chord (Ctrl+V).
    fn paste(&self, window: &ActiveWindow) -> Result<()>;
}

/// The supported typing backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTool {
    Xdotool,
    Wtype,
}

impl TypeTool {
    pub const NAMES: [&'static str; 2] = ["xdotool", "wtype"];

    /// Picks `requested` when given, otherwise the tool matching the session.
    pub fn best_option(requested: Option<&str>) -> Result<Self> {
        if let Some(name) = requested {
            return Ok(name.parse()?);
        }

        let tool = if is_wayland_session() && is_on_path("wtype") {
            TypeTool::Wtype
        } else {
            TypeTool::Xdotool
        };

        log::debug!("Using typing backend {}", tool.name());
        Ok(tool)
    }
}

impl FromStr for TypeTool {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "xdotool" => Ok(TypeTool::Xdotool),
            "wtype" => Ok(TypeTool::Wtype),
            other => Err(ValidationError::UnknownTool {
                kind: "typer",
                name: other.to_string(),
                expected: Self::NAMES.to_vec(),
            }),
        }
    }
}

impl Typer for TypeTool {
    fn name(&self) -> &'static str {
        match self {
            TypeTool::Xdotool => "xdotool",
            TypeTool::Wtype => "wtype",
        }
    }

    fn active_window(&self) -> Result<ActiveWindow> {
        match self {
            TypeTool::Xdotool => {
                let id = run_checked("xdotool", ["getactivewindow"], None)?;
                Ok(ActiveWindow::new(id.trim()))
            }
            // Wayland gives clients no handle on other windows
            TypeTool::Wtype => Ok(ActiveWindow::unknown()),
        }
    }

    fn type_text(&self, text: &str, window: &ActiveWindow) -> Result<()> {
        log::debug!("Typing {} characters into {}", text.chars().count(), window);

        match self {
            TypeTool::Xdotool => {
                run_checked("xdotool", xdotool_arguments("type", window, text), None)?;
            }
            TypeTool::Wtype => {
                run_checked("wtype", ["--", text], None)?;
            }
        }
        Ok(())
    }

    fn paste(&self, window: &ActiveWindow) -> Result<()> {
        log::debug!("Sending paste to {}", window);

        match self {
            TypeTool::Xdotool => {
                run_checked("xdotool", xdotool_arguments("key", window, "ctrl+v"), None)?;
            }
            TypeTool::Wtype => {
                run_checked("wtype", ["-M", "ctrl", "v", "-m", "ctrl"], None)?;
            }
        }
        Ok(())
    }
}

/// `xdotool <command> --clearmodifiers [--window ID] -- <argument>`
fn xdotool_arguments(command: &str, window: &ActiveWindow, argument: &str) -> Vec<String> {
    let mut args = vec![command.to_string(), "--clearmodifiers".to_string()];
    if let Some(id) = window.id() {
        args.push("--window".to_string());
        args.push(id.to_string());
    }
    args.push("--".to_string());
    args.push(argument.to_string());
    args
}
