use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use csv_audit::{
    AuditConfig, ReportFormat, audit_table, read_csv_table, write_duplicates, write_report,
};
use tools_common::expand_home;

use crate::cli::{AuditArgs, ReportFormatArg};
use crate::summary::print_summary;

/// Validate arguments into a config before touching the filesystem.
pub fn build_config(args: &AuditArgs) -> csv_audit::Result<AuditConfig> {
    let report_format = match args.report_format {
        ReportFormatArg::Csv => ReportFormat::Csv,
        ReportFormatArg::Json => ReportFormat::Json,
    };
    let config = AuditConfig::new(expand_home(&args.path))
        .with_delimiter(&args.delimiter)?
        .with_encoding(&args.encoding)?
        .with_report(args.report.as_deref().map(expand_home), report_format)
        .with_dupes_out(args.dupes_out.as_deref().map(expand_home))
        .with_top_unique(args.top_unique);
    Ok(config)
}

pub fn run_audit(args: &AuditArgs) -> Result<()> {
    let config = build_config(args)?;
    let span = info_span!("audit", path = %config.path.display());
    let _guard = span.enter();

    let start = Instant::now();
    let table = read_csv_table(&config.path, config.delimiter, config.encoding)?;
    let display_path = config.path.display().to_string();
    let result = audit_table(&table, &display_path, config.top_unique);
    info!(
        rows = result.rows,
        columns = result.columns,
        duplicate_rows = result.duplicate_rows(),
        duration_ms = start.elapsed().as_millis(),
        "audit complete"
    );

    print_summary(&result);

    if let Some(report_path) = &config.report_path {
        write_report(report_path, config.report_format, &result)?;
        let label = match config.report_format {
            ReportFormat::Csv => "Report CSV",
            ReportFormat::Json => "Report JSON",
        };
        println!();
        println!("{label} written to: {}", absolute_display(report_path));
    }

    if let Some(dupes_path) = &config.dupes_out_path {
        write_duplicates(dupes_path, &table, &result)?;
        info!(
            path = %dupes_path.display(),
            rows = result.duplicate_rows(),
            "duplicate rows exported"
        );
        println!(
            "Duplicate rows CSV written to: {}",
            absolute_display(dupes_path)
        );
    }

    Ok(())
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
