//! Configuration loading and validation.

mod loader;
mod types;
mod validate;

use thiserror::Error;

pub use loader::{load_config, load_config_from_str};
pub use types::{Config, LogsConfig, PathsConfig};
pub use validate::validate_config;

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    /// Config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// Config parsed but failed validation.
    #[error("Invalid config: {0}")]
    ValidationError(String),
}
