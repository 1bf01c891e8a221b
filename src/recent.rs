// src/recent.rs
//! Bounded, most-recent-first history of delivered payloads.
//!
//! The store is a plain text file, one entry per line. Every update is
//! written to a sibling temporary file and renamed over the committed one,
//! so a reader in another invocation sees either the previous list or the
//! next one, never a torn write. Concurrent writers are last-writer-wins.

use crate::constants::{DATA_DIR_NAME, RECENT_FILE_NAME, RECENT_TEMP_FILE_NAME};
use crate::error::{AppError, Result};
use crate::types::RecentLimit;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Resolved locations of the committed recent file and its staging file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub recent: PathBuf,
    pub staging: PathBuf,
}

impl StorePaths {
    /// Lays out the store inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            recent: dir.join(RECENT_FILE_NAME),
            staging: dir.join(RECENT_TEMP_FILE_NAME),
        }
    }

    /// Lays out the store under `<data_home>/rofi-generic/`.
    pub fn under_data_home(data_home: impl AsRef<Path>) -> Self {
        Self::in_dir(data_home.as_ref().join(DATA_DIR_NAME))
    }
}

/// The persisted recent list.
#[derive(Debug, Clone)]
pub struct RecentStore {
    paths: StorePaths,
}

impl RecentStore {
    pub fn new(paths: StorePaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    /// Returns at most `limit` entries, most recent first.
    ///
    /// A store that was never written reads as empty. Lines are kept
    /// byte-for-byte (only the line terminator is dropped) so an entry reads
    /// back exactly as it was inserted.
    pub fn load(&self, limit: usize) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.paths.recent) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "No recent file at {}, starting empty",
                    self.paths.recent.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .take(limit)
            .map(str::to_string)
            .collect())
    }

    /// Returns the entry at 1-based `position`.
    pub fn get(&self, position: usize) -> Result<String> {
        let entries = self.load(crate::constants::RECENT_CEILING)?;
        let available = entries.len();

        position
            .checked_sub(1)
            .and_then(|index| entries.into_iter().nth(index))
            .ok_or(AppError::NotFound {
                position,
                available,
            })
    }

    /// Moves `text` to the front of the list and commits it atomically.
    ///
    /// Older occurrences of `text` are dropped and the list is cut to
    /// `max_recent` entries, which is itself capped at the ceiling.
    pub fn insert(&self, text: &str, max_recent: usize) -> Result<Vec<String>> {
        let limit = RecentLimit::new(max_recent).get();
        let previous = self.load(usize::MAX)?;

        let entries = reorder(text, previous, limit);
        self.commit(&entries)?;

        log::debug!(
            "Recorded recent entry ({} of at most {} kept)",
            entries.len(),
            limit
        );
        Ok(entries)
    }

    /// Writes the staging file and renames it over the committed file.
    fn commit(&self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.paths.staging.parent() {
            fs::create_dir_all(parent)?;
        }

        let write_staging = || -> io::Result<()> {
            let mut writer = BufWriter::new(fs::File::create(&self.paths.staging)?);
            for entry in entries {
                writer.write_all(entry.as_bytes())?;
                writer.write_all(b"\n")?;
            }
            writer.into_inner().map_err(|e| e.into_error())?.sync_all()
        };

        if let Err(e) = write_staging() {
            log::error!(
                "Failed to stage recent list at {}: {}",
                self.paths.staging.display(),
                e
            );
            if self.paths.staging.is_file() {
                let _ = fs::remove_file(&self.paths.staging);
            }
            return Err(e.into());
        }

        fs::rename(&self.paths.staging, &self.paths.recent)?;
        Ok(())
    }
}

/// Builds the next list: `text` first, then earlier entries without
/// duplicates, cut to `limit`.
fn reorder(text: &str, previous: Vec<String>, limit: usize) -> Vec<String> {
    let mut entries: Vec<String> = Vec::with_capacity(limit);
    let candidates = std::iter::once(text.to_string()).chain(previous);

    for entry in candidates {
        if entries.len() == limit {
            break;
        }
        if !entries.contains(&entry) {
            entries.push(entry);
        }
    }

    entries
}
