// src/output/mod.rs
//! Delivery of payloads to the focused application.
//!
//! The collaborators ([`Typer`], [`Clipboarder`]) wrap external tools;
//! the [`OutputRouter`] only decides which of them runs, and in which order.

mod clipboard;
mod router;
mod typer;
mod types;

// Re-export the public interface
pub use clipboard::{ClipboardTool, Clipboarder};
pub use router::{ClipboardRestore, OutputRouter};
pub use typer::{TypeTool, Typer};
pub use types::{DeliveryMode, DeliveryReport};
