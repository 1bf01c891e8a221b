use thiserror::Error;

mod domain_types;

pub use domain_types::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid separator: {separator:?} - {reason}")]
    InvalidSeparator { separator: String, reason: String },

    #[error("Unknown {kind} '{name}', expected one of: {}", expected.join(", "))]
    UnknownTool {
        kind: &'static str,
        name: String,
        expected: Vec<&'static str>,
    },
}
