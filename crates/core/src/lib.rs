pub mod config;
pub mod journal;
pub mod manifest;
pub mod orchestrator;
pub mod testing;
pub mod tracker;
pub mod uploader;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, LogsConfig,
    PathsConfig,
};
pub use journal::{Disposition, Journal, JournalError, UploadEvent};
pub use manifest::{parse_shortnames, read_shortnames};
pub use orchestrator::{
    DatasetOutcome, DatasetPaths, OrchestratorConfig, OrchestratorError, RunReport,
    UploadOrchestrator, ZipOutcome,
};
pub use tracker::{FileTracker, TrackerError, UploadTracker};
pub use uploader::{ProcessUploader, Uploader, UploaderConfig, UploaderError};
