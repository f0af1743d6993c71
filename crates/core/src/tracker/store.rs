//! Tracker storage trait and error type.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from tracker storage backends.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Tracker file could not be opened or read.
    #[error("Failed to open tracker file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// A new entry could not be appended.
    #[error("Failed to append to tracker file {path}: {source}")]
    Append { path: PathBuf, source: io::Error },
}

/// Trait for upload tracker backends.
///
/// Implementations are loaded once and appended to for the lifetime of a
/// run; entries are never removed or mutated.
pub trait UploadTracker: Send + Sync {
    /// Whether a shortname has already been fully handled.
    fn contains(&self, shortname: &str) -> bool;

    /// Record a shortname as handled, durably.
    ///
    /// Recording an already-present shortname is a no-op.
    fn record(&self, shortname: &str) -> Result<(), TrackerError>;

    /// Number of tracked shortnames.
    fn len(&self) -> usize;

    /// Whether the tracker is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
