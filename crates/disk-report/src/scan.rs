//! Depth-bounded subdirectory enumeration.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Whether a directory name carries the hidden-file marker.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn hidden_entry(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(is_hidden)
}

/// Subdirectories of `base` from depth 1 (direct children) to `max_depth`,
/// depth-first, siblings in file-name order.
///
/// Hidden directories and everything below them are skipped unless
/// `include_hidden` is set. Directories that cannot be read are still listed
/// themselves; their contents are silently skipped.
pub fn subdirectories(base: &Path, max_depth: usize, include_hidden: bool) -> Vec<PathBuf> {
    if max_depth == 0 {
        return Vec::new();
    }
    let root = std::fs::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || include_hidden || !hidden_entry(entry));

    let mut found = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_dir() => found.push(entry.into_path()),
            Ok(_) => {}
            Err(error) => {
                debug!(
                    path = ?error.path(),
                    %error,
                    "skipping unreadable directory"
                );
            }
        }
    }
    found
}
