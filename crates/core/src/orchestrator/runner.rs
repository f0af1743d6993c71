//! Upload orchestrator implementation.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::journal::{Journal, UploadEvent};
use crate::manifest;
use crate::tracker::UploadTracker;
use crate::uploader::Uploader;

use super::config::OrchestratorConfig;
use super::types::{DatasetOutcome, DatasetPaths, OrchestratorError, RunReport, ZipOutcome};

/// The upload orchestrator - walks the shortname list and delegates each
/// artifact to the uploader.
pub struct UploadOrchestrator<U>
where
    U: Uploader,
{
    config: OrchestratorConfig,
    uploader: U,
    tracker: Arc<dyn UploadTracker>,
    journal: Arc<Journal>,
}

impl<U> UploadOrchestrator<U>
where
    U: Uploader,
{
    /// Create a new orchestrator.
    pub fn new(
        config: OrchestratorConfig,
        uploader: U,
        tracker: Arc<dyn UploadTracker>,
        journal: Arc<Journal>,
    ) -> Self {
        Self {
            config,
            uploader,
            tracker,
            journal,
        }
    }

    /// Process every pending shortname from the input list, in order.
    ///
    /// An unreadable input list degrades to an empty run. Per-dataset
    /// failures are journaled and never abort the remaining list; only a
    /// tracker append failure is fatal, since without it completed
    /// datasets would be re-uploaded on the next run.
    pub async fn run(&self) -> Result<RunReport, OrchestratorError> {
        let shortnames = match manifest::read_shortnames(&self.config.input_file) {
            Ok(shortnames) => shortnames,
            Err(e) => {
                error!(
                    "Failed to read input file {}: {}",
                    self.config.input_file.display(),
                    e
                );
                Vec::new()
            }
        };

        info!(
            "Processing {} shortnames with uploader '{}' ({} already tracked)",
            shortnames.len(),
            self.uploader.name(),
            self.tracker.len()
        );

        let mut report = RunReport::default();
        for shortname in &shortnames {
            let outcome = self.process_one(shortname).await?;
            report.tally(outcome);
        }

        Ok(report)
    }

    /// Run the upload sequence for a single shortname.
    async fn process_one(&self, shortname: &str) -> Result<DatasetOutcome, OrchestratorError> {
        if self.tracker.contains(shortname) {
            info!("Skipping {}, already uploaded", shortname);
            return Ok(DatasetOutcome::Skipped);
        }

        let paths = DatasetPaths::resolve(&self.config.base_dir, shortname);
        info!("Checking dataset: {}", shortname);
        debug!(
            "Paths for {}: directory {}, zip {}, metadata {}",
            shortname,
            paths.directory.display(),
            paths.zip.display(),
            paths.metadata.display()
        );

        if !paths.directory.is_dir() {
            error!(
                "Missing dataset directory for {}: {}",
                shortname,
                paths.directory.display()
            );
            self.journal_record(UploadEvent::MissingDirectory {
                shortname: shortname.to_string(),
                path: paths.directory.clone(),
            });
            return Ok(DatasetOutcome::MissingDirectory);
        }

        // Metadata rides along only when the file actually exists.
        let metadata = paths.metadata.is_file().then_some(paths.metadata.as_path());

        info!("Uploading directory for {}", shortname);
        match self.uploader.upload(&paths.directory, metadata).await {
            Ok(()) => {
                info!("Directory upload succeeded: {}", shortname);
                self.journal_record(UploadEvent::DirectoryUploaded {
                    shortname: shortname.to_string(),
                });
            }
            Err(e) => {
                error!("Directory upload failed for {}: {}", shortname, e);
                self.journal_record(UploadEvent::DirectoryUploadFailed {
                    shortname: shortname.to_string(),
                });
                // Zip is skipped and the shortname stays eligible for retry.
                return Ok(DatasetOutcome::DirectoryFailed);
            }
        }

        let zip = if paths.zip.is_file() {
            info!("Uploading zip for {}", shortname);
            match self.uploader.upload(&paths.zip, metadata).await {
                Ok(()) => {
                    info!("Zip upload succeeded: {}", shortname);
                    self.journal_record(UploadEvent::ZipUploaded {
                        shortname: shortname.to_string(),
                    });
                    ZipOutcome::Uploaded
                }
                Err(e) => {
                    error!("Zip upload failed for {}: {}", shortname, e);
                    self.journal_record(UploadEvent::ZipUploadFailed {
                        shortname: shortname.to_string(),
                    });
                    ZipOutcome::Failed
                }
            }
        } else {
            info!("No zip found for {}, only directory uploaded", shortname);
            ZipOutcome::Absent
        };

        // Mark as uploaded regardless of the zip outcome.
        self.tracker.record(shortname)?;

        Ok(DatasetOutcome::Uploaded { zip })
    }

    fn journal_record(&self, event: UploadEvent) {
        if let Err(e) = self.journal.record(&event) {
            error!("Failed to record journal entry for {}: {}", event.shortname(), e);
        }
    }
}
