//! Upload orchestrator.
//!
//! Drives each pending dataset through the upload sequence:
//! - Skip: shortname already in the tracker
//! - Directory upload: gating, with optional metadata attachment
//! - Zip upload: attempted only after a successful directory upload
//! - Tracking: the shortname is recorded once the sequence completes,
//!   whether or not the zip step succeeded
//!
//! Processing is strictly sequential in input order; one failing dataset
//! never aborts the rest of the list.

mod config;
mod runner;
mod types;

pub use config::OrchestratorConfig;
pub use runner::UploadOrchestrator;
pub use types::{DatasetOutcome, DatasetPaths, OrchestratorError, RunReport, ZipOutcome};
