//! CLI argument definitions for the CSV auditor.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tools_common::LoggingArgs;

#[derive(Parser)]
#[command(
    name = "csv-audit",
    version,
    about = "Audit a CSV file for missing values, duplicates, and basic stats",
    long_about = "Audit a CSV file for missing values, duplicates, and basic stats.\n\n\
                  Missing value = empty cell after trimming whitespace.\n\
                  Duplicate row = exact match across all columns (after trimming).\n\
                  Numbers may use ',' as a thousands separator (\"1,234.5\")."
)]
pub struct Cli {
    #[command(flatten)]
    pub audit: AuditArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

#[derive(Debug, clap::Args)]
pub struct AuditArgs {
    /// Path to the CSV file (must have a header row).
    #[arg(long = "path", value_name = "FILE")]
    pub path: PathBuf,

    /// Field delimiter, a single character (use '\t' for tabs).
    #[arg(long = "delimiter", default_value = ",")]
    pub delimiter: String,

    /// Input text encoding (e.g. utf-8, utf-8-sig, latin-1, cp1252, utf-16le).
    #[arg(long = "encoding", default_value = "utf-8")]
    pub encoding: String,

    /// Write a summary report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Format of the summary report.
    #[arg(long = "report-format", value_enum, default_value = "csv")]
    pub report_format: ReportFormatArg,

    /// Write every duplicate row (excluding first occurrences) to this CSV.
    #[arg(long = "dupes-out", value_name = "PATH")]
    pub dupes_out: Option<PathBuf>,

    /// Show the N most common values per column (0 disables).
    #[arg(
        long = "top-unique",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub top_unique: i64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["csv-audit", "--path", "people.csv"]);
        assert_eq!(cli.audit.path, PathBuf::from("people.csv"));
        assert_eq!(cli.audit.delimiter, ",");
        assert_eq!(cli.audit.encoding, "utf-8");
        assert_eq!(cli.audit.top_unique, 0);
        assert!(cli.audit.report.is_none());
        assert!(cli.audit.dupes_out.is_none());
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["csv-audit"]).is_err());
    }

    #[test]
    fn negative_top_unique_parses() {
        let cli = Cli::parse_from(["csv-audit", "--path", "a.csv", "--top-unique", "-2"]);
        assert_eq!(cli.audit.top_unique, -2);
    }
}
