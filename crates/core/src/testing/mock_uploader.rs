//! Mock uploader for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::uploader::{Uploader, UploaderError};

/// A recorded upload attempt for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    /// Artifact path that was submitted.
    pub artifact: PathBuf,
    /// Metadata path, if one was attached.
    pub metadata: Option<PathBuf>,
    /// Whether the upload succeeded.
    pub success: bool,
}

/// Mock implementation of the Uploader trait.
///
/// Provides controllable behavior for testing:
/// - Track upload attempts for assertions
/// - Script failures for specific artifact paths
/// - Inject a one-shot error for the next attempt
#[derive(Debug, Clone, Default)]
pub struct MockUploader {
    /// Recorded upload attempts.
    uploads: Arc<RwLock<Vec<RecordedUpload>>>,
    /// Artifact paths scripted to fail on every attempt.
    fail_paths: Arc<RwLock<HashSet<PathBuf>>>,
    /// If set, the next attempt fails with this error.
    next_error: Arc<RwLock<Option<UploaderError>>>,
}

impl MockUploader {
    /// Create a new mock uploader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded upload attempts.
    pub async fn recorded_uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.read().await.clone()
    }

    /// Get the number of upload attempts.
    pub async fn upload_count(&self) -> usize {
        self.uploads.read().await.len()
    }

    /// Clear recorded uploads.
    pub async fn clear_recorded(&self) {
        self.uploads.write().await.clear();
    }

    /// Script every attempt on `path` to fail.
    pub async fn fail_on(&self, path: impl AsRef<Path>) {
        self.fail_paths
            .write()
            .await
            .insert(path.as_ref().to_path_buf());
    }

    /// Configure the next attempt to fail with the given error.
    pub async fn set_next_error(&self, error: UploaderError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<UploaderError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Uploader for MockUploader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn upload(
        &self,
        artifact: &Path,
        metadata: Option<&Path>,
    ) -> Result<(), UploaderError> {
        let scripted_failure = self.fail_paths.read().await.contains(artifact);
        let injected = self.take_error().await;
        let success = !scripted_failure && injected.is_none();

        self.uploads.write().await.push(RecordedUpload {
            artifact: artifact.to_path_buf(),
            metadata: metadata.map(Path::to_path_buf),
            success,
        });

        if let Some(err) = injected {
            return Err(err);
        }
        if scripted_failure {
            return Err(UploaderError::NonZeroExit { code: Some(1) });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_successful_uploads() {
        let uploader = MockUploader::new();

        uploader
            .upload(Path::new("/data/ds1"), Some(Path::new("/data/ds1/m.xml")))
            .await
            .unwrap();

        let uploads = uploader.recorded_uploads().await;
        assert_eq!(uploads.len(), 1);
        assert!(uploads[0].success);
        assert_eq!(uploads[0].artifact, PathBuf::from("/data/ds1"));
        assert_eq!(uploads[0].metadata, Some(PathBuf::from("/data/ds1/m.xml")));
    }

    #[tokio::test]
    async fn test_scripted_path_failure() {
        let uploader = MockUploader::new();
        uploader.fail_on("/data/ds1.zip").await;

        let result = uploader.upload(Path::new("/data/ds1.zip"), None).await;
        assert!(matches!(result, Err(UploaderError::NonZeroExit { .. })));

        // other paths still succeed
        uploader.upload(Path::new("/data/ds1"), None).await.unwrap();

        let uploads = uploader.recorded_uploads().await;
        assert!(!uploads[0].success);
        assert!(uploads[1].success);
    }

    #[tokio::test]
    async fn test_next_error_is_one_shot() {
        let uploader = MockUploader::new();
        uploader
            .set_next_error(UploaderError::CommandNotFound {
                command: "missing".to_string(),
            })
            .await;

        let first = uploader.upload(Path::new("/data/ds1"), None).await;
        assert!(matches!(first, Err(UploaderError::CommandNotFound { .. })));

        let second = uploader.upload(Path::new("/data/ds1"), None).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_clear_recorded() {
        let uploader = MockUploader::new();
        uploader.upload(Path::new("/data/ds1"), None).await.unwrap();
        uploader.clear_recorded().await;
        assert_eq!(uploader.upload_count().await, 0);
    }
}
