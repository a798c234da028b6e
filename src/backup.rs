use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;

/// Backup directory for one run. The path embeds the run-start
/// timestamp so repeated runs on the same directory never collide; the
/// directory itself is created on first use only, so a run that backs
/// nothing up leaves nothing behind.
pub struct BackupDir {
    path: PathBuf,
    created: bool,
}

impl BackupDir {
    pub fn new(root: &Path, run_started: &NaiveDateTime) -> Self {
        let path = root.join(format!("backup_{}", run_started.format("%Y%m%d_%H%M%S")));
        Self {
            path,
            created: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn was_created(&self) -> bool {
        self.created
    }

    /// Copy a file into the backup directory under its current name,
    /// creating the directory first if this is the first copy.
    pub fn copy_in(&mut self, src: &Path) -> anyhow::Result<PathBuf> {
        if !self.created {
            fs::create_dir_all(&self.path)
                .with_context(|| format!("creating backup dir {}", self.path.display()))?;
            self.created = true;
        }
        let name = src
            .file_name()
            .with_context(|| format!("no file name in {}", src.display()))?;
        let dest = self.path.join(name);
        fs::copy(src, &dest)
            .with_context(|| format!("backing up {}", src.display()))?;
        Ok(dest)
    }
}
