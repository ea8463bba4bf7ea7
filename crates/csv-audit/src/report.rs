//! Machine-readable outputs: the summary report (CSV or JSON) and the
//! duplicate-rows export.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::audit::{AuditResult, ColumnStat, DuplicatePair, TopValue};
use crate::config::ReportFormat;
use crate::error::{AuditError, Result};
use crate::reader::CsvTable;

/// Column header of the per-column table in the CSV report.
pub const REPORT_COLUMNS: [&str; 8] = [
    "column",
    "non_empty",
    "missing",
    "unique_count",
    "numeric_count",
    "numeric_min",
    "numeric_max",
    "numeric_mean",
];

/// Write the summary report to `path` in the requested format.
///
/// # Errors
///
/// Fails when the file or its parent directories cannot be created or written.
pub fn write_report(path: &Path, format: ReportFormat, result: &AuditResult) -> Result<()> {
    let writer = create_output(path)?;
    match format {
        ReportFormat::Csv => write_report_csv(writer, result).map_err(|e| csv_error(path, e)),
        ReportFormat::Json => write_report_json(writer, result).map_err(|e| AuditError::JsonWrite {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write every duplicate occurrence to `path`, under the original header row.
///
/// # Errors
///
/// Fails when the file or its parent directories cannot be created or written.
pub fn write_duplicates(path: &Path, table: &CsvTable, result: &AuditResult) -> Result<()> {
    let writer = create_output(path)?;
    write_duplicates_csv(writer, table, &result.duplicates).map_err(|e| csv_error(path, e))
}

/// Render the key/value header, the per-column table, and the optional
/// top-values section.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_report_csv<W: Write>(mut writer: W, result: &AuditResult) -> csv::Result<()> {
    let summary = [
        ("file", result.path.clone()),
        ("rows", result.rows.to_string()),
        ("columns", result.columns.to_string()),
        ("duplicate_rows_exact", result.duplicate_rows().to_string()),
        (
            "duplicate_examples_first_to_dup",
            format_examples(result.duplicate_examples(), "; "),
        ),
    ];
    let mut csv = section_writer(&mut writer);
    for (key, value) in &summary {
        csv.write_record([*key, value.as_str()])?;
    }
    csv.flush()?;
    drop(csv);

    writer.write_all(b"\n")?;
    let mut csv = section_writer(&mut writer);
    csv.write_record(REPORT_COLUMNS)?;
    for stat in &result.per_column {
        csv.write_record(column_record(stat))?;
    }
    csv.flush()?;
    drop(csv);

    if result.has_top_values() {
        writer.write_all(b"\n")?;
        let mut csv = section_writer(&mut writer);
        csv.write_record(["top_values_per_column"])?;
        for stat in result.per_column.iter().filter(|s| !s.top_values.is_empty()) {
            let values = format_top_values(&stat.top_values, "; ");
            csv.write_record([stat.column.as_str(), values.as_str()])?;
        }
        csv.flush()?;
    }
    writer.flush()?;
    Ok(())
}

/// One block of the report; sections differ in width and are separated by
/// a bare newline written on the underlying writer.
fn section_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    rows: usize,
    columns: usize,
    duplicate_rows: usize,
    duplicate_examples: &'a [DuplicatePair],
    per_column: &'a [ColumnStat],
}

/// Pretty-printed JSON form of the report.
///
/// # Errors
///
/// Propagates serialization and writer failures.
pub fn write_report_json<W: Write>(mut writer: W, result: &AuditResult) -> serde_json::Result<()> {
    let report = JsonReport {
        file: &result.path,
        rows: result.rows,
        columns: result.columns,
        duplicate_rows: result.duplicate_rows(),
        duplicate_examples: result.duplicate_examples(),
        per_column: &result.per_column,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)
}

/// Header row followed by the full record of each duplicate occurrence.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_duplicates_csv<W: Write>(
    writer: W,
    table: &CsvTable,
    duplicates: &[DuplicatePair],
) -> csv::Result<()> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(&table.headers)?;
    for pair in duplicates {
        if let Some(row) = table.rows.get(pair.duplicate - 1) {
            csv.write_record(row.values())?;
        }
    }
    csv.flush()?;
    Ok(())
}

/// `1->3; 4->9` style rendering of duplicate pairs.
pub fn format_examples(pairs: &[DuplicatePair], separator: &str) -> String {
    pairs
        .iter()
        .map(|pair| format!("{}->{}", pair.first, pair.duplicate))
        .collect::<Vec<_>>()
        .join(separator)
}

/// `value(count)` entries joined by `separator`.
pub fn format_top_values(values: &[TopValue], separator: &str) -> String {
    values
        .iter()
        .map(|tv| format!("{}({})", tv.value, tv.count))
        .collect::<Vec<_>>()
        .join(separator)
}

fn column_record(stat: &ColumnStat) -> [String; 8] {
    [
        stat.column.clone(),
        stat.non_empty.to_string(),
        stat.missing.to_string(),
        stat.unique_count.to_string(),
        stat.numeric_count.to_string(),
        format_optional(stat.numeric_min),
        format_optional(stat.numeric_max),
        format_optional(stat.numeric_mean),
    ]
}

fn format_optional(value: Option<f64>) -> String {
    value.map(|number| format!("{number:.6}")).unwrap_or_default()
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let io_error = |source: io::Error| AuditError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = File::create(path).map_err(io_error)?;
    Ok(BufWriter::new(file))
}

fn csv_error(path: &Path, source: csv::Error) -> AuditError {
    AuditError::CsvWrite {
        path: path.to_path_buf(),
        source,
    }
}
