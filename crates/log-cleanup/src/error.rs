//! Error types for log cleanup.

use std::path::PathBuf;

use thiserror::Error;
use tools_common::exit;

#[derive(Debug, Error)]
pub enum CleanupError {
    /// Root path is missing or is not a directory.
    #[error("path is not a folder: {path}")]
    NotADirectory { path: PathBuf },

    /// The root directory itself could not be listed.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CleanupError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotADirectory { .. } => exit::USAGE,
            Self::DirectoryRead { .. } => exit::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanupError>;
