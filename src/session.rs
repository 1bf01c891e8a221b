// src/session.rs
//! One picker run: show the menu, resolve the answer, deliver, remember.

use crate::config::PickerConfig;
use crate::dispatch::{dispatch, DispatchOutcome};
use crate::error::Result;
use crate::menu::{format_recent_message, MenuLauncher, MenuRequest};
use crate::output::{Clipboarder, DeliveryReport, OutputRouter, Typer};
use crate::recent::RecentStore;
use crate::types::{ActiveWindow, CandidateSet, Payload};
use std::time::Duration;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResult {
    /// The user cancelled the picker.
    Aborted,
    /// The picker exited with a status nothing is bound to.
    Ignored { status: i32 },
    Delivered {
        payload: Payload,
        report: DeliveryReport,
    },
}

/// The collaborators a run talks to.
pub struct Session<'a> {
    launcher: &'a dyn MenuLauncher,
    typer: &'a dyn Typer,
    clipboarder: &'a dyn Clipboarder,
    store: &'a RecentStore,
    settle: Option<Duration>,
}

impl<'a> Session<'a> {
    pub fn new(
        launcher: &'a dyn MenuLauncher,
        typer: &'a dyn Typer,
        clipboarder: &'a dyn Clipboarder,
        store: &'a RecentStore,
    ) -> Self {
        Self {
            launcher,
            typer,
            clipboarder,
            store,
            settle: None,
        }
    }

    /// Overrides the pause between pasting and restoring the clipboard.
    pub fn with_settle_delay(mut self, settle: Duration) -> Self {
        self.settle = Some(settle);
        self
    }

    /// Runs the picker over `candidates` and acts on the answer.
    pub fn run(&self, config: &PickerConfig, candidates: CandidateSet) -> Result<SessionResult> {
        let window = self.capture_window();

        let recent = self.recent_entries(config.max_recent.get());
        let request = MenuRequest {
            prompt: config.prompt.clone(),
            candidates,
            message: Some(format_recent_message(&recent)),
            extra_args: config.rofi_args.clone(),
        };

        let response = self.launcher.show(&request)?;
        let payload = match dispatch(&response, &config.separator)? {
            DispatchOutcome::Abort => {
                log::info!("Selection cancelled");
                return Ok(SessionResult::Aborted);
            }
            DispatchOutcome::Ignored { status } => return Ok(SessionResult::Ignored { status }),
            DispatchOutcome::DeliverPayload(payload) => payload,
            DispatchOutcome::DeliverRecent(position) => {
                log::info!("Delivering recent entry {}", position);
                Payload::new(self.store.get(position)?)
            }
        };

        let mut router = OutputRouter::new(self.typer, self.clipboarder, &window);
        if let Some(settle) = self.settle {
            router = router.with_settle_delay(settle);
        }
        let report = router.deliver(&payload, config.mode)?;

        if payload.is_empty() {
            log::debug!("Not recording an empty payload");
        } else {
            self.store
                .insert(payload.as_str(), config.max_recent.get())?;
        }

        Ok(SessionResult::Delivered { payload, report })
    }

    /// Captures the focused window before the picker takes focus.
    ///
    /// Without a handle the typing tool targets whichever window has focus
    /// once the picker closes.
    fn capture_window(&self) -> ActiveWindow {
        match self.typer.active_window() {
            Ok(window) => {
                log::debug!("Captured {}", window);
                window
            }
            Err(e) => {
                log::warn!("Could not determine the active window: {}", e);
                ActiveWindow::unknown()
            }
        }
    }

    /// Recent entries for the message bar; an unreadable store shows none.
    fn recent_entries(&self, limit: usize) -> Vec<String> {
        self.store.load(limit).unwrap_or_else(|e| {
            log::warn!(
                "Could not read recent entries from {}: {}",
                self.store.paths().recent.display(),
                e
            );
            Vec::new()
        })
    }
}
