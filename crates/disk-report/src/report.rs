//! Building report rows and exporting them as CSV.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tools_common::free_percent;
use tracing::{info, warn};

use crate::config::{DiskConfig, resolve_target};
use crate::error::{DiskError, Result};
use crate::probe::SpaceProbe;
use crate::scan::subdirectories;

pub const CSV_HEADER: [&str; 5] = ["target", "total_bytes", "used_bytes", "free_bytes", "free_percent"];

/// Filesystem capacity as seen from one target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskRow {
    pub target: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
}

impl DiskRow {
    pub fn free_percent(&self) -> f64 {
        free_percent(self.free_bytes, self.total_bytes)
    }
}

/// Rows in report order (root first, then subdirectories depth-first) and
/// the informational note from target resolution, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskReport {
    pub rows: Vec<DiskRow>,
    pub note: Option<String>,
    /// Subdirectories whose filesystem could not be determined.
    pub skipped: Vec<PathBuf>,
}

fn measure(probe: &dyn SpaceProbe, target: &Path) -> Result<DiskRow> {
    let usage = probe.usage(target)?;
    Ok(DiskRow {
        target: target.display().to_string(),
        total_bytes: usage.total,
        used_bytes: usage.used,
        free_bytes: usage.free,
    })
}

/// Measure the configured target and, when enabled, each subdirectory.
///
/// # Errors
///
/// Fails when the target is invalid or its own filesystem cannot be
/// measured. Subdirectory failures are collected in [`DiskReport::skipped`].
pub fn build_rows(config: &DiskConfig, probe: &dyn SpaceProbe) -> Result<DiskReport> {
    let resolved = resolve_target(&config.path)?;
    let mut rows = vec![measure(probe, &resolved.directory)?];
    let mut skipped = Vec::new();

    if config.scans_subdirectories() {
        let subdirs = subdirectories(&resolved.directory, config.max_depth, config.include_hidden);
        info!(count = subdirs.len(), max_depth = config.max_depth, "subdirectories found");
        for subdir in subdirs {
            match measure(probe, &subdir) {
                Ok(row) => rows.push(row),
                Err(error) => {
                    warn!(path = %subdir.display(), %error, "skipping subdirectory");
                    skipped.push(subdir);
                }
            }
        }
    }

    Ok(DiskReport {
        rows,
        note: resolved.note,
        skipped,
    })
}

/// Write raw byte counts with a generation timestamp to `path`.
///
/// # Errors
///
/// Fails when the file or its parent directories cannot be created or written.
pub fn write_csv(path: &Path, rows: &[DiskRow], generated_at: &str) -> Result<()> {
    let io_error = |source| DiskError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    write_csv_to(BufWriter::new(file), rows, generated_at).map_err(|source| DiskError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// # Errors
///
/// Propagates writer failures.
pub fn write_csv_to<W: Write>(writer: W, rows: &[DiskRow], generated_at: &str) -> csv::Result<()> {
    let mut csv = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(["generated_at", generated_at])?;
    csv.write_record(CSV_HEADER)?;
    for row in rows {
        csv.write_record([
            row.target.clone(),
            row.total_bytes.to_string(),
            row.used_bytes.to_string(),
            row.free_bytes.to_string(),
            format!("{:.2}", row.free_percent()),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
