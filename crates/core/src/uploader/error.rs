//! Error types for the uploader module.

use thiserror::Error;

/// Errors that can occur while invoking the external uploader.
#[derive(Debug, Error)]
pub enum UploaderError {
    /// Uploader command not found.
    #[error("Uploader command not found: {command}")]
    CommandNotFound { command: String },

    /// The uploader ran but reported failure.
    #[error("Uploader exited with status {code:?}")]
    NonZeroExit { code: Option<i32> },

    /// The uploader could not be launched.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
