use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Snapshot of one candidate file, taken once at run start and never
/// re-read mid-run so preview and apply see the same state.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// File name with extension
    pub name: String,
    /// Directory containing the file
    pub dir: PathBuf,
    /// Last-modified time (local), used for the mdate fallback
    pub modified: NaiveDateTime,
}

impl FileEntry {
    pub fn new(name: String, dir: &Path, modified: NaiveDateTime) -> Self {
        Self {
            name,
            dir: dir.to_path_buf(),
            modified,
        }
    }

    /// Full path of the file as it exists on disk.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}
