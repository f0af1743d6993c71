//! Mock implementations for testing.

mod mock_uploader;

pub use mock_uploader::{MockUploader, RecordedUpload};
