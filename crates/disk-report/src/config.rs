//! Validated report parameters and target resolution.

use std::path::{Path, PathBuf};

use crate::error::{DiskError, Result};

/// Immutable report configuration, built once from the command line.
#[derive(Debug, Clone)]
pub struct DiskConfig {
    pub path: PathBuf,
    pub recursive: bool,
    /// Deepest subdirectory level to report (1 = direct children).
    pub max_depth: usize,
    pub csv_path: Option<PathBuf>,
    pub include_hidden: bool,
}

impl DiskConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            max_depth: 1,
            csv_path: None,
            include_hidden: false,
        }
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool, max_depth: i64) -> Self {
        self.recursive = recursive;
        self.max_depth = usize::try_from(max_depth.max(0)).unwrap_or(usize::MAX);
        self
    }

    #[must_use]
    pub fn with_csv(mut self, path: Option<PathBuf>) -> Self {
        self.csv_path = path;
        self
    }

    #[must_use]
    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Whether subdirectories should be enumerated at all.
    pub fn scans_subdirectories(&self) -> bool {
        self.recursive && self.max_depth > 0
    }
}

/// The directory actually queried, plus an informational note when it
/// differs from what the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub directory: PathBuf,
    pub note: Option<String>,
}

/// Check `path` and pick the directory whose filesystem will be measured.
///
/// A file is replaced by its parent directory.
///
/// # Errors
///
/// Fails when the path does not exist, cannot be inspected, or is neither a
/// file nor a directory.
pub fn resolve_target(path: &Path) -> Result<ResolvedTarget> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DiskError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DiskError::PathCheck {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.is_dir() {
        return Ok(ResolvedTarget {
            directory: path.to_path_buf(),
            note: None,
        });
    }
    if metadata.is_file() {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let note = format!(
            "Path is a file; using parent directory for disk usage: {}",
            parent.display()
        );
        return Ok(ResolvedTarget {
            directory: parent,
            note: Some(note),
        });
    }
    Err(DiskError::UnsupportedPathType {
        path: path.to_path_buf(),
    })
}
