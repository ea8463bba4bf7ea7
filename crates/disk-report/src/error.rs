//! Error types for disk reporting.

use std::path::PathBuf;

use thiserror::Error;
use tools_common::exit;

#[derive(Debug, Error)]
pub enum DiskError {
    /// Target path does not exist.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Target exists but is neither a file nor a directory.
    #[error("unsupported path type: {path}")]
    UnsupportedPathType { path: PathBuf },

    /// The OS refused to describe the target.
    #[error("OS error when checking path {path}: {source}")]
    PathCheck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS could not report capacity for the filesystem holding the target.
    #[error("failed to query disk usage for {path}: {source}")]
    SpaceQuery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl DiskError {
    /// Validation failures exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } | Self::UnsupportedPathType { .. } | Self::PathCheck { .. } => {
                exit::USAGE
            }
            Self::SpaceQuery { .. } | Self::OutputWrite { .. } | Self::CsvWrite { .. } => {
                exit::FAILURE
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DiskError>;
