//! Error types for CSV auditing.

use std::path::PathBuf;

use thiserror::Error;
use tools_common::exit;

/// Errors that terminate an audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    // === Configuration Errors ===
    /// Delimiter is not exactly one ASCII character.
    #[error("delimiter must be a single ASCII character (e.g. ',' or '\\t'), got {value:?}")]
    InvalidDelimiter { value: String },

    /// Encoding label not recognised.
    #[error("unknown encoding: {label}")]
    UnknownEncoding { label: String },

    // === Input Errors ===
    /// CSV file does not exist.
    #[error("CSV not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file.
    #[error("not a file: {path}")]
    NotAFile { path: PathBuf },

    /// File has no header row at all.
    #[error("CSV appears to have no header row: {path}")]
    MissingHeader { path: PathBuf },

    /// Header row is present but every name is blank.
    #[error("CSV header row is empty: {path}")]
    EmptyHeader { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Output Errors ===
    /// Failed to create or write an output file.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a CSV output record.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize the JSON report.
    #[error("failed to write JSON report {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AuditError {
    /// Process exit code for this error.
    ///
    /// Bad arguments and unusable input files exit with 2; I/O and parse
    /// failures past validation are unexpected and exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDelimiter { .. }
            | Self::UnknownEncoding { .. }
            | Self::FileNotFound { .. }
            | Self::NotAFile { .. }
            | Self::MissingHeader { .. }
            | Self::EmptyHeader { .. } => exit::USAGE,
            Self::FileRead { .. }
            | Self::CsvParse { .. }
            | Self::OutputWrite { .. }
            | Self::CsvWrite { .. }
            | Self::JsonWrite { .. } => exit::FAILURE,
        }
    }
}

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuditError::FileNotFound {
            path: PathBuf::from("/data/people.csv"),
        };
        assert_eq!(err.to_string(), "CSV not found: /data/people.csv");
    }

    #[test]
    fn test_exit_codes() {
        let usage = AuditError::InvalidDelimiter {
            value: ";;".to_string(),
        };
        assert_eq!(usage.exit_code(), 2);

        let io = AuditError::FileRead {
            path: PathBuf::from("x.csv"),
            source: std::io::Error::other("boom"),
        };
        assert_eq!(io.exit_code(), 1);
    }
}
