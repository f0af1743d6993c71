use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::uploader::UploaderConfig;

/// Root configuration
///
/// Every section is defaultable; the defaults reproduce the fixed relative
/// paths the tool has always used, so running without a config file works.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub uploader: UploaderConfig,
}

/// Input and tracker file locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Line-oriented list of dataset shortnames to upload.
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,
    /// Append-only set of shortnames already handled.
    #[serde(default = "default_tracker_file")]
    pub tracker_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            tracker_file: default_tracker_file(),
        }
    }
}

fn default_input_file() -> PathBuf {
    PathBuf::from("dataset_shortnames.txt")
}

fn default_tracker_file() -> PathBuf {
    PathBuf::from("datasets_uploaded.txt")
}

/// Log file locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogsConfig {
    /// Directory holding all log files, created at startup.
    #[serde(default = "default_logs_dir")]
    pub dir: PathBuf,
    /// General run log, mirrored to stdout.
    #[serde(default = "default_general_log")]
    pub general: String,
    /// Per-dataset success entries.
    #[serde(default = "default_success_log")]
    pub success: String,
    /// Per-dataset failure entries.
    #[serde(default = "default_failure_log")]
    pub failure: String,
}

impl LogsConfig {
    /// Full path of the general log file.
    pub fn general_path(&self) -> PathBuf {
        self.dir.join(&self.general)
    }

    /// Full path of the success log file.
    pub fn success_path(&self) -> PathBuf {
        self.dir.join(&self.success)
    }

    /// Full path of the failure log file.
    pub fn failure_path(&self) -> PathBuf {
        self.dir.join(&self.failure)
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            dir: default_logs_dir(),
            general: default_general_log(),
            success: default_success_log(),
            failure: default_failure_log(),
        }
    }
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_general_log() -> String {
    "uploads.log".to_string()
}

fn default_success_log() -> String {
    "upload_success.log".to_string()
}

fn default_failure_log() -> String {
    "upload_failure.log".to_string()
}
