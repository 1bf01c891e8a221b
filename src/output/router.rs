// src/output/router.rs
//! Executes a delivery by calling the typing and clipboard collaborators.
//!
//! This module is the only place that decides which collaborator runs and
//! in what order; the collaborators themselves do the I/O.

use super::clipboard::Clipboarder;
use super::typer::Typer;
use super::types::{DeliveryMode, DeliveryReport};
use crate::error::{AppError, Result};
use crate::types::{ActiveWindow, Payload};
use std::time::{Duration, Instant};

/// Routes payloads to exactly one delivery strategy.
pub struct OutputRouter<'a> {
    typer: &'a dyn Typer,
    clipboarder: &'a dyn Clipboarder,
    window: &'a ActiveWindow,
    settle: Duration,
}

impl<'a> OutputRouter<'a> {
    pub fn new(
        typer: &'a dyn Typer,
        clipboarder: &'a dyn Clipboarder,
        window: &'a ActiveWindow,
    ) -> Self {
        Self {
            typer,
            clipboarder,
            window,
            settle: Duration::from_millis(crate::constants::PASTE_SETTLE_MS),
        }
    }

    /// Overrides the pause between pasting and restoring the clipboard.
    pub fn with_settle_delay(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Delivers `payload` using `mode`.
    pub fn deliver(&self, payload: &Payload, mode: DeliveryMode) -> Result<DeliveryReport> {
        let start = Instant::now();
        log::info!("Delivering payload via {}", mode);

        match mode {
            DeliveryMode::Type => self.typer.type_text(payload.as_str(), self.window)?,
            DeliveryMode::Copy => self.clipboarder.copy(payload.as_str())?,
            DeliveryMode::CopyPasteRestore => self.copy_paste_restore(payload)?,
        }

        let report = DeliveryReport {
            mode,
            chars_delivered: payload.as_str().chars().count(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        log::debug!(
            "Delivered {} characters in {}ms",
            report.chars_delivered,
            report.duration_ms
        );
        Ok(report)
    }

    fn copy_paste_restore(&self, payload: &Payload) -> Result<()> {
        if self.clipboarder.copy_blocks() {
            return Err(AppError::Clipboard(format!(
                "{} holds the clipboard until it is replaced and cannot paste and restore; \
                 install xsel, xclip or wl-clipboard",
                self.clipboarder.name()
            )));
        }

        let _restore = ClipboardRestore::acquire(self.clipboarder)?;

        self.clipboarder.copy(payload.as_str())?;
        self.typer.paste(self.window)?;
        std::thread::sleep(self.settle);

        Ok(())
    }
}

/// Snapshot of the clipboard that is put back when the guard drops.
///
/// Restoration runs on every exit path of the scope holding the guard,
/// including early returns and unwinding.
pub struct ClipboardRestore<'a> {
    clipboarder: &'a dyn Clipboarder,
    original: Option<String>,
}

impl<'a> ClipboardRestore<'a> {
    /// Reads the current clipboard. Fails before anything was changed.
    pub fn acquire(clipboarder: &'a dyn Clipboarder) -> Result<Self> {
        let original = clipboarder.read()?;
        log::debug!(
            "Saved clipboard ({})",
            if original.is_some() { "text" } else { "empty" }
        );
        Ok(Self {
            clipboarder,
            original,
        })
    }
}

impl Drop for ClipboardRestore<'_> {
    fn drop(&mut self) {
        let restored = match &self.original {
            Some(text) => self.clipboarder.copy(text),
            None => self.clipboarder.clear(),
        };

        if let Err(e) = restored {
            log::error!("Failed to restore clipboard: {}", e);
        }
    }
}
