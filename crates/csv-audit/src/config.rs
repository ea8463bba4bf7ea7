//! Validated audit parameters.

use std::path::PathBuf;

use encoding_rs::Encoding;

use crate::error::{AuditError, Result};

/// Output format for the `--report` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Immutable audit configuration, built once from the command line.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub path: PathBuf,
    pub delimiter: u8,
    pub encoding: &'static Encoding,
    pub report_path: Option<PathBuf>,
    pub report_format: ReportFormat,
    pub dupes_out_path: Option<PathBuf>,
    /// Number of most frequent values to keep per column; 0 disables.
    pub top_unique: usize,
}

impl AuditConfig {
    /// Comma-delimited UTF-8 audit of `path` with no extra outputs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            encoding: encoding_rs::UTF_8,
            report_path: None,
            report_format: ReportFormat::default(),
            dupes_out_path: None,
            top_unique: 0,
        }
    }

    /// Set the delimiter from its command-line spelling.
    ///
    /// # Errors
    ///
    /// Fails unless `value` is exactly one ASCII character.
    pub fn with_delimiter(mut self, value: &str) -> Result<Self> {
        self.delimiter = parse_delimiter(value)?;
        Ok(self)
    }

    /// Set the input encoding from a label such as `utf-8`, `latin-1` or
    /// `utf-8-sig`.
    ///
    /// # Errors
    ///
    /// Fails when the label is unknown.
    pub fn with_encoding(mut self, label: &str) -> Result<Self> {
        self.encoding = resolve_encoding(label)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_report(mut self, path: Option<PathBuf>, format: ReportFormat) -> Self {
        self.report_path = path;
        self.report_format = format;
        self
    }

    #[must_use]
    pub fn with_dupes_out(mut self, path: Option<PathBuf>) -> Self {
        self.dupes_out_path = path;
        self
    }

    /// Negative counts are clamped to 0.
    #[must_use]
    pub fn with_top_unique(mut self, count: i64) -> Self {
        self.top_unique = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
        self
    }
}

pub fn parse_delimiter(value: &str) -> Result<u8> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
        _ => Err(AuditError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}

/// Resolve a WHATWG label, falling back to common Python codec spellings.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let trimmed = label.trim();
    Encoding::for_label(trimmed.as_bytes())
        .or_else(|| codec_alias(trimmed))
        .ok_or_else(|| AuditError::UnknownEncoding {
            label: label.to_string(),
        })
}

fn codec_alias(label: &str) -> Option<&'static Encoding> {
    let normalized = label.to_ascii_lowercase().replace('_', "-");
    let encoding = match normalized.as_str() {
        // BOMs are stripped during decoding, so the `-sig` variant is plain UTF-8.
        "utf-8-sig" | "utf8-sig" | "u8" | "utf" | "cp65001" => encoding_rs::UTF_8,
        "latin-1" | "8859" | "cp819" => encoding_rs::WINDOWS_1252,
        "utf-16-le" | "utf16le" => encoding_rs::UTF_16LE,
        "utf-16-be" | "utf16be" => encoding_rs::UTF_16BE,
        other => return Encoding::for_label(other.as_bytes()),
    };
    Some(encoding)
}
