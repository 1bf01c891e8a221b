// src/lib.rs
//! rofi-generic library — pick a text entry in rofi and type or copy it.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `PickerConfig`
//! - **Dispatch** — `classify_exit`, `dispatch`, `DispatchOutcome`
//! - **Recent history** — `RecentStore`, `StorePaths`
//! - **Menu** — `MenuLauncher`, `RofiLauncher`
//! - **Delivery** — `OutputRouter`, `Typer`, `Clipboarder`
//! - **Session** — `Session`, the whole run

mod config;
mod constants;
mod dispatch;
mod error;
mod input;
mod menu;
mod output;
mod process;
mod recent;
mod session;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{rc_arguments, CommandLineInput, PickerConfig};
pub use crate::constants::RECENT_CEILING;

// --- Domain Types ---
pub use crate::types::{ActiveWindow, CandidateSet, Payload, RecentLimit, Separator};

// --- Dispatch ---
pub use crate::dispatch::{classify_exit, dispatch, AlternateKey, DispatchOutcome, ExitAction};

// --- Recent History ---
pub use crate::recent::{RecentStore, StorePaths};

// --- Menu ---
pub use crate::input::read_candidates;
pub use crate::menu::{
    format_recent_message, picker_arguments, MenuLauncher, MenuRequest, MenuResponse,
    RofiLauncher,
};

// --- Delivery ---
pub use crate::output::{
    ClipboardRestore, ClipboardTool, Clipboarder, DeliveryMode, DeliveryReport, OutputRouter,
    TypeTool, Typer,
};

// --- Session ---
pub use crate::session::{Session, SessionResult};
