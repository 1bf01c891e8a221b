// src/input.rs
//! Reading candidate lines from the input files.

use crate::error::{AppError, Result};
use crate::types::CandidateSet;
use std::fs;
use std::path::PathBuf;

/// Concatenates the lines of every file, in the order given.
pub fn read_candidates(files: &[PathBuf]) -> Result<CandidateSet> {
    let mut candidates = CandidateSet::new();

    for path in files {
        if !path.is_file() {
            return Err(AppError::InputFileNotFound { path: path.clone() });
        }

        let content = fs::read_to_string(path)?;
        let before = candidates.len();
        candidates.extend(content.lines());
        log::debug!(
            "Read {} candidates from {}",
            candidates.len() - before,
            path.display()
        );
    }

    if candidates.is_empty() {
        log::warn!("No candidates to show; only recent entries can be selected");
    }

    Ok(candidates)
}
