//! Configuration for the uploader module.

use serde::{Deserialize, Serialize};

/// Configuration for the external uploader invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploaderConfig {
    /// Command to invoke for each artifact.
    #[serde(default = "default_command")]
    pub command: String,

    /// Whether to target the repository sandbox instead of production.
    #[serde(default = "default_sandbox")]
    pub sandbox: bool,

    /// Additional arguments appended to every invocation.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_command() -> String {
    "zenodo-create".to_string()
}

fn default_sandbox() -> bool {
    true
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            sandbox: default_sandbox(),
            extra_args: Vec::new(),
        }
    }
}

impl UploaderConfig {
    /// Creates a config with a custom command.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    /// Sets sandbox mode.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sets additional arguments.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }
}
