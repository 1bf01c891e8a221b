// src/output/clipboard.rs
//! Clipboard access through the platform's command-line tools or arboard.
//!
//! The command-line tools are preferred on Linux: they keep serving the
//! selection after this short-lived process exits. An arboard copy on Linux
//! only survives because this process stays alive serving it until another
//! program takes the clipboard over.

use crate::error::{AppError, Result};
use crate::process::{feed_tool, is_on_path, is_wayland_session, run_tool};
use crate::types::ValidationError;
use std::str::FromStr;

/// Reads and writes the system clipboard.
pub trait Clipboarder {
    fn name(&self) -> &'static str;

    /// Current text content, or `None` when the clipboard holds no text.
    fn read(&self) -> Result<Option<String>>;

    fn copy(&self, text: &str) -> Result<()>;

    fn clear(&self) -> Result<()>;

    /// Whether `copy` blocks, serving the text until another program
    /// replaces it.
    fn copy_blocks(&self) -> bool {
        false
    }
}

/// The supported clipboard backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    Xsel,
    Xclip,
    WlClipboard,
    Arboard,
}

impl ClipboardTool {
    pub const NAMES: [&'static str; 4] = ["xsel", "xclip", "wl-copy", "arboard"];

    /// Picks `requested` when given, otherwise the first backend usable in
    /// this session.
    pub fn best_option(requested: Option<&str>) -> Result<Self> {
        if let Some(name) = requested {
            return Ok(name.parse()?);
        }

        let preference: &[ClipboardTool] = if is_wayland_session() {
            &[ClipboardTool::WlClipboard, ClipboardTool::Xsel, ClipboardTool::Xclip]
        } else {
            &[ClipboardTool::Xsel, ClipboardTool::Xclip, ClipboardTool::WlClipboard]
        };

        let tool = preference
            .iter()
            .copied()
            .find(|tool| is_on_path(tool.executable()))
            .unwrap_or(ClipboardTool::Arboard);

        log::debug!("Using clipboard backend {}", tool.name());
        Ok(tool)
    }

    fn executable(self) -> &'static str {
        match self {
            ClipboardTool::Xsel => "xsel",
            ClipboardTool::Xclip => "xclip",
            ClipboardTool::WlClipboard => "wl-copy",
            ClipboardTool::Arboard => "arboard",
        }
    }
}

impl FromStr for ClipboardTool {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "xsel" => Ok(ClipboardTool::Xsel),
            "xclip" => Ok(ClipboardTool::Xclip),
            "wl-copy" | "wl-clipboard" => Ok(ClipboardTool::WlClipboard),
            "arboard" => Ok(ClipboardTool::Arboard),
            other => Err(ValidationError::UnknownTool {
                kind: "clipboarder",
                name: other.to_string(),
                expected: Self::NAMES.to_vec(),
            }),
        }
    }
}

impl Clipboarder for ClipboardTool {
    fn name(&self) -> &'static str {
        self.executable()
    }

    fn read(&self) -> Result<Option<String>> {
        match self {
            ClipboardTool::Xsel => read_with("xsel", &["--clipboard", "--output"]),
            ClipboardTool::Xclip => read_with("xclip", &["-selection", "clipboard", "-out"]),
            ClipboardTool::WlClipboard => read_with("wl-paste", &["--no-newline"]),
            ClipboardTool::Arboard => read_with_arboard(),
        }
    }

    fn copy(&self, text: &str) -> Result<()> {
        log::debug!("Copying {} characters to clipboard", text.chars().count());

        match self {
            ClipboardTool::Xsel => feed_tool("xsel", ["--clipboard", "--input"], text),
            ClipboardTool::Xclip => feed_tool("xclip", ["-selection", "clipboard", "-in"], text),
            ClipboardTool::WlClipboard => feed_tool("wl-copy", std::iter::empty::<&str>(), text),
            ClipboardTool::Arboard => copy_with_arboard(text),
        }
    }

    fn clear(&self) -> Result<()> {
        match self {
            ClipboardTool::Xsel => feed_tool("xsel", ["--clipboard", "--delete"], ""),
            ClipboardTool::Xclip => feed_tool("xclip", ["-selection", "clipboard", "-in"], ""),
            ClipboardTool::WlClipboard => feed_tool("wl-copy", ["--clear"], ""),
            ClipboardTool::Arboard => {
                arboard::Clipboard::new()?.clear()?;
                Ok(())
            }
        }
    }

    fn copy_blocks(&self) -> bool {
        *self == ClipboardTool::Arboard && cfg!(target_os = "linux")
    }
}

/// Reads the clipboard through a tool; a failing read means "no text".
///
/// xclip and wl-paste exit non-zero when the selection is empty or holds
/// no text target.
fn read_with(program: &str, args: &[&str]) -> Result<Option<String>> {
    let output = run_tool(program, args, None)?;

    if output.status.success() {
        Ok(Some(output.stdout))
    } else {
        log::debug!(
            "{} reported no clipboard text: {}",
            program,
            output.stderr.trim()
        );
        Ok(None)
    }
}

fn read_with_arboard() -> Result<Option<String>> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn copy_with_arboard(content: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    // X11 and Wayland drop the selection with its owner, so hold it here
    #[cfg(target_os = "linux")]
    let result = {
        use arboard::SetExtLinux;
        log::info!("Holding the clipboard until another program replaces it");
        clipboard.set().wait().text(content)
    };
    #[cfg(not(target_os = "linux"))]
    let result = clipboard.set_text(content);

    result.map_err(|e| AppError::Clipboard(format!("Failed to set clipboard text: {}", e)))
}
