//! CSV structural audit.
//!
//! Reads a delimited file with a header row and reports, per column, missing
//! values, distinct values, and numeric min/max/mean, plus exact duplicate
//! rows across the whole file.
//!
//! # Example
//!
//! ```ignore
//! use csv_audit::{AuditConfig, audit_table, read_csv_table};
//!
//! let config = AuditConfig::new("people.csv").with_delimiter(",")?;
//! let table = read_csv_table(&config.path, config.delimiter, config.encoding)?;
//! let result = audit_table(&table, "people.csv", 5);
//! println!("{} duplicate rows", result.duplicate_rows());
//! ```

pub mod audit;
pub mod config;
mod error;
pub mod reader;
pub mod report;

// === Error Types ===
pub use error::{AuditError, Result};

// === Configuration ===
pub use config::{AuditConfig, ReportFormat};

// === Reading ===
pub use reader::{CsvTable, Row, parse_csv_table, read_csv_table};

// === Aggregation ===
pub use audit::{
    AuditResult, ColumnStat, DUPLICATE_PREVIEW_LIMIT, DuplicatePair, TopValue, audit_table,
    parse_number,
};

// === Outputs ===
pub use report::{write_duplicates, write_report};
