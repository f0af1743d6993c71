//! Process-spawning uploader implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::config::UploaderConfig;
use super::error::UploaderError;
use super::traits::Uploader;

/// Uploader that shells out to the external deposit command.
///
/// The child inherits stdout/stderr so the tool's own output lands in the
/// operator's terminal; the exit status is the only signal observed.
pub struct ProcessUploader {
    config: UploaderConfig,
}

impl ProcessUploader {
    /// Creates a new process uploader with the given configuration.
    pub fn new(config: UploaderConfig) -> Self {
        Self { config }
    }

    /// Creates an uploader with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(UploaderConfig::default())
    }

    /// Builds the argument vector for one invocation.
    fn build_args(&self, artifact: &Path, metadata: Option<&Path>) -> Vec<String> {
        let mut args = vec![
            "--folder".to_string(),
            artifact.to_string_lossy().to_string(),
        ];

        if self.config.sandbox {
            args.push("--test".to_string());
        }

        if let Some(metadata) = metadata {
            args.extend([
                "--iso_file".to_string(),
                metadata.to_string_lossy().to_string(),
            ]);
        }

        args.extend(self.config.extra_args.iter().cloned());

        args
    }
}

#[async_trait]
impl Uploader for ProcessUploader {
    fn name(&self) -> &str {
        "process"
    }

    async fn upload(
        &self,
        artifact: &Path,
        metadata: Option<&Path>,
    ) -> Result<(), UploaderError> {
        let args = self.build_args(artifact, metadata);

        let status = Command::new(&self.config.command)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    UploaderError::CommandNotFound {
                        command: self.config.command.clone(),
                    }
                } else {
                    UploaderError::Io(e)
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(UploaderError::NonZeroExit {
                code: status.code(),
            })
        }
    }
}
