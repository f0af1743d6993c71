//! Per-dataset result journals.
//!
//! Two append-only text logs record the outcome of every upload attempt:
//! one for successes, one for failures. Each entry is a single
//! timestamp-prefixed line. The [`Journal`] is constructed once at process
//! start and shared by reference with the orchestrator; the general run
//! log is separate (the tracing subscriber, owned by the binary).

mod events;

use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

pub use events::{Disposition, UploadEvent};

/// Errors from journal files.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A journal file could not be opened.
    #[error("Failed to open journal file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// An entry could not be appended.
    #[error("Failed to write journal file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Append-only success/failure journals.
pub struct Journal {
    success: Sink,
    failure: Sink,
}

struct Sink {
    path: PathBuf,
    file: Mutex<File>,
}

impl Sink {
    fn open(path: &Path) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| JournalError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    fn append(&self, message: &str) -> Result<(), JournalError> {
        let line = format!("[{}] {}", Utc::now().format("%Y-%m-%d %H:%M:%S"), message);
        let mut file = self.file.lock().unwrap();
        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|source| JournalError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

impl Journal {
    /// Open both journal files, creating them if absent.
    ///
    /// The parent directory must already exist.
    pub fn open(success_path: &Path, failure_path: &Path) -> Result<Self, JournalError> {
        Ok(Self {
            success: Sink::open(success_path)?,
            failure: Sink::open(failure_path)?,
        })
    }

    /// Append an event to the journal matching its disposition.
    pub fn record(&self, event: &UploadEvent) -> Result<(), JournalError> {
        let sink = match event.disposition() {
            Disposition::Success => &self.success,
            Disposition::Failure => &self.failure,
        };
        sink.append(&event.message())
    }
}
