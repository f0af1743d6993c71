//! Upload progress tracking.
//!
//! The tracker is the persisted set of shortnames already handled. It is
//! read once at startup and appended to as datasets complete, making
//! re-runs idempotent: a tracked shortname is never re-attempted, even if
//! its zip step previously failed.

mod file_store;
mod store;

pub use file_store::FileTracker;
pub use store::{TrackerError, UploadTracker};
