use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CleanupError, Result};

const SECONDS_PER_DAY: u64 = 86_400;

/// Whether eligible files are removed or only reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    DryRun,
    Delete,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::DryRun => "DRY-RUN",
            Self::Delete => "DELETE",
        }
    }
}

/// Immutable cleanup configuration.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Canonical root directory.
    pub root: PathBuf,
    pub days: u64,
    pub recursive: bool,
    pub mode: Mode,
}

impl CleanupConfig {
    /// Validate `path` as an existing directory and canonicalize it.
    ///
    /// # Errors
    ///
    /// Fails when `path` does not exist or is not a directory.
    pub fn new(path: &Path, days: u64, recursive: bool, mode: Mode) -> Result<Self> {
        let not_a_directory = || CleanupError::NotADirectory {
            path: path.to_path_buf(),
        };
        let root = std::fs::canonicalize(path).map_err(|_| not_a_directory())?;
        if !root.is_dir() {
            return Err(not_a_directory());
        }
        Ok(Self {
            root,
            days,
            recursive,
            mode,
        })
    }

    /// Age beyond which a file becomes eligible.
    pub fn threshold(&self) -> Duration {
        threshold(self.days)
    }
}

pub fn threshold(days: u64) -> Duration {
    Duration::from_secs(days.saturating_mul(SECONDS_PER_DAY))
}
