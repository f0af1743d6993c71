use std::path::PathBuf;

/// Configuration for the upload orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Base directory containing dataset directories and zip archives.
    pub base_dir: PathBuf,
    /// Line-oriented list of dataset shortnames to process.
    pub input_file: PathBuf,
}

impl OrchestratorConfig {
    /// Creates an orchestrator config.
    pub fn new(base_dir: impl Into<PathBuf>, input_file: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            input_file: input_file.into(),
        }
    }
}
