use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which journal an event belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Success,
    Failure,
}

/// Per-dataset outcome events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UploadEvent {
    /// The dataset directory was uploaded.
    DirectoryUploaded { shortname: String },
    /// The dataset zip archive was uploaded.
    ZipUploaded { shortname: String },
    /// The dataset directory does not exist; nothing was attempted.
    MissingDirectory { shortname: String, path: PathBuf },
    /// The directory upload failed; the zip step was skipped.
    DirectoryUploadFailed { shortname: String },
    /// The zip upload failed after a successful directory upload.
    ZipUploadFailed { shortname: String },
}

impl UploadEvent {
    /// The shortname this event is about.
    pub fn shortname(&self) -> &str {
        match self {
            UploadEvent::DirectoryUploaded { shortname }
            | UploadEvent::ZipUploaded { shortname }
            | UploadEvent::MissingDirectory { shortname, .. }
            | UploadEvent::DirectoryUploadFailed { shortname }
            | UploadEvent::ZipUploadFailed { shortname } => shortname,
        }
    }

    /// Which journal this event is recorded in.
    pub fn disposition(&self) -> Disposition {
        match self {
            UploadEvent::DirectoryUploaded { .. } | UploadEvent::ZipUploaded { .. } => {
                Disposition::Success
            }
            UploadEvent::MissingDirectory { .. }
            | UploadEvent::DirectoryUploadFailed { .. }
            | UploadEvent::ZipUploadFailed { .. } => Disposition::Failure,
        }
    }

    /// Human-readable journal line body.
    pub fn message(&self) -> String {
        match self {
            UploadEvent::DirectoryUploaded { shortname } => {
                format!("{}: directory uploaded", shortname)
            }
            UploadEvent::ZipUploaded { shortname } => format!("{}: zip uploaded", shortname),
            UploadEvent::MissingDirectory { shortname, path } => {
                format!("{}: missing dataset directory {}", shortname, path.display())
            }
            UploadEvent::DirectoryUploadFailed { shortname } => {
                format!("{}: directory upload failed", shortname)
            }
            UploadEvent::ZipUploadFailed { shortname } => {
                format!("{}: zip upload failed", shortname)
            }
        }
    }
}
