use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local, NaiveDateTime};

use crate::media::FileEntry;

const EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Enumerate candidate image files in a directory, non-recursive,
/// sorted by name so preview and apply walk the same order.
pub fn list_candidate_files(dir: &Path) -> anyhow::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for item in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let item = item.with_context(|| format!("reading entry in {}", dir.display()))?;
        let path = item.path();
        if path.is_dir() || !has_image_extension(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let modified = item
            .metadata()
            .and_then(|m| m.modified())
            .with_context(|| format!("reading mtime of {}", path.display()))?;
        let modified: NaiveDateTime = DateTime::<Local>::from(modified).naive_local();

        entries.push(FileEntry::new(name.to_string(), dir, modified));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.iter().any(|ok| e.eq_ignore_ascii_case(ok)))
        .unwrap_or(false)
}
