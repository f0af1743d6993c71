use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::tracker::TrackerError;

/// Derived locations for one dataset shortname.
///
/// This is the only derivation rule: for shortname `S` under base `B`,
/// the directory is `B/S`, the zip is `B/S.zip`, and the metadata file is
/// `B/S/metadata/S.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub shortname: String,
    pub directory: PathBuf,
    pub zip: PathBuf,
    pub metadata: PathBuf,
}

impl DatasetPaths {
    /// Resolve the artifact paths for `shortname` under `base`.
    pub fn resolve(base: &Path, shortname: &str) -> Self {
        let directory = base.join(shortname);
        Self {
            zip: base.join(format!("{}.zip", shortname)),
            metadata: directory.join("metadata").join(format!("{}.xml", shortname)),
            directory,
            shortname: shortname.to_string(),
        }
    }
}

/// Outcome of the zip step for one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipOutcome {
    /// Zip archive uploaded.
    Uploaded,
    /// Zip archive present but its upload failed (non-gating).
    Failed,
    /// No zip archive next to the dataset directory.
    Absent,
}

/// Final disposition of one dataset in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetOutcome {
    /// Already tracked; nothing attempted.
    Skipped,
    /// Dataset directory absent; left eligible for retry.
    MissingDirectory,
    /// Directory upload failed; zip skipped, left eligible for retry.
    DirectoryFailed,
    /// Directory uploaded and the shortname recorded in the tracker.
    Uploaded { zip: ZipOutcome },
}

/// Totals for one completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Shortnames skipped because they were already tracked.
    pub skipped: usize,
    /// Shortnames newly recorded in the tracker.
    pub uploaded: usize,
    /// Shortnames left eligible for retry (missing directory or failed
    /// directory upload).
    pub failed: usize,
    /// Zip uploads that failed without blocking tracking.
    pub zip_failures: usize,
}

impl RunReport {
    pub(super) fn tally(&mut self, outcome: DatasetOutcome) {
        match outcome {
            DatasetOutcome::Skipped => self.skipped += 1,
            DatasetOutcome::MissingDirectory | DatasetOutcome::DirectoryFailed => {
                self.failed += 1;
            }
            DatasetOutcome::Uploaded { zip } => {
                self.uploaded += 1;
                if zip == ZipOutcome::Failed {
                    self.zip_failures += 1;
                }
            }
        }
    }
}

/// Errors that abort an orchestrator run.
///
/// Per-dataset upload failures are not errors at this level; only losing
/// the ability to persist progress is fatal.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The tracker could not be appended to.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dataset_paths() {
        let paths = DatasetPaths::resolve(Path::new("/downloads"), "ds1");
        assert_eq!(paths.shortname, "ds1");
        assert_eq!(paths.directory, PathBuf::from("/downloads/ds1"));
        assert_eq!(paths.zip, PathBuf::from("/downloads/ds1.zip"));
        assert_eq!(
            paths.metadata,
            PathBuf::from("/downloads/ds1/metadata/ds1.xml")
        );
    }

    #[test]
    fn test_report_tally() {
        let mut report = RunReport::default();
        report.tally(DatasetOutcome::Skipped);
        report.tally(DatasetOutcome::MissingDirectory);
        report.tally(DatasetOutcome::DirectoryFailed);
        report.tally(DatasetOutcome::Uploaded {
            zip: ZipOutcome::Failed,
        });
        report.tally(DatasetOutcome::Uploaded {
            zip: ZipOutcome::Absent,
        });

        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 2);
        assert_eq!(report.uploaded, 2);
        assert_eq!(report.zip_failures, 1);
    }
}
