// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names a failure mode of one invocation. A missing recent
//! file is deliberately absent: the store recovers it as an empty list.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Input file not found: {}", path.display())]
    InputFileNotFound { path: PathBuf },

    #[error("Picker protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("No recent entry at position {position} ({available} available)")]
    NotFound { position: usize, available: usize },

    #[error("Failed to run {tool}: {source}")]
    ExternalProcess {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited unsuccessfully: {message}")]
    ToolFailed { tool: String, message: String },

    #[error("Picker was terminated before reporting an exit status")]
    PickerTerminated,

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Wraps a launch failure of an external tool.
    pub fn launch(tool: impl Into<String>, source: std::io::Error) -> Self {
        AppError::ExternalProcess {
            tool: tool.into(),
            source,
        }
    }
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
