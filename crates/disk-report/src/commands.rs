use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use disk_report::{DiskConfig, StatvfsProbe, build_rows, write_csv};
use tools_common::expand_home;

use crate::cli::ReportArgs;
use crate::summary::{print_header, print_rows};

pub fn build_config(args: &ReportArgs) -> DiskConfig {
    DiskConfig::new(expand_home(&args.path))
        .with_recursive(args.recursive, args.max_depth)
        .with_csv(args.csv.as_deref().map(expand_home))
        .with_include_hidden(args.include_hidden)
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let config = build_config(args);
    let span = info_span!("disk_report", path = %config.path.display());
    let _guard = span.enter();

    let start = Instant::now();
    let report = build_rows(&config, &StatvfsProbe)?;
    info!(
        rows = report.rows.len(),
        skipped = report.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "disk report complete"
    );

    if let Some(note) = &report.note {
        println!("Note: {note}");
    }
    print_header(&config);
    print_rows(&report.rows);

    if let Some(csv_path) = &config.csv_path {
        let generated_at = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        write_csv(csv_path, &report.rows, &generated_at)?;
        println!();
        println!("CSV written to: {}", absolute_display(csv_path));
    }
    Ok(())
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
