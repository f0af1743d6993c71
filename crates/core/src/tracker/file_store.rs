//! Flat-file tracker backend.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::store::{TrackerError, UploadTracker};

/// Tracker backed by a plain text file, one shortname per line.
///
/// The file is read once at open; entries are trimmed, blank lines are
/// skipped, and duplicates collapse into the in-memory set. The file
/// itself is never rewritten, only appended to.
pub struct FileTracker {
    path: PathBuf,
    inner: Mutex<Inner>,
}

struct Inner {
    seen: HashSet<String>,
    file: File,
}

impl FileTracker {
    /// Open the tracker at `path`, creating it if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let path = path.as_ref().to_path_buf();

        let seen = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|source| TrackerError::Open {
                path: path.clone(),
                source,
            })?;
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            HashSet::new()
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| TrackerError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            inner: Mutex::new(Inner { seen, file }),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UploadTracker for FileTracker {
    fn contains(&self, shortname: &str) -> bool {
        self.inner.lock().unwrap().seen.contains(shortname)
    }

    fn record(&self, shortname: &str) -> Result<(), TrackerError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.seen.contains(shortname) {
            return Ok(());
        }

        writeln!(inner.file, "{}", shortname)
            .and_then(|_| inner.file.flush())
            .map_err(|source| TrackerError::Append {
                path: self.path.clone(),
                source,
            })?;

        inner.seen.insert(shortname.to_string());
        Ok(())
    }

    fn len(&self) -> usize {
        self.inner.lock().unwrap().seen.len()
    }
}
