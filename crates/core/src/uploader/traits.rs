//! Trait definition for the uploader module.

use async_trait::async_trait;
use std::path::Path;

use super::error::UploaderError;

/// An uploader that can transfer one artifact to the remote repository.
///
/// The artifact is either a dataset directory or a zip archive; an
/// optional metadata file may accompany it. Implementations report only
/// success or failure.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Returns the name of this uploader implementation.
    fn name(&self) -> &str;

    /// Uploads a single artifact, blocking until the transfer finishes.
    async fn upload(&self, artifact: &Path, metadata: Option<&Path>)
        -> Result<(), UploaderError>;
}
