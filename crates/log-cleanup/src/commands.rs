use std::time::{Instant, SystemTime};

use anyhow::Result;
use tracing::{info, info_span};

use log_cleanup::{CleanupConfig, FsRemover, Mode, discover, execute, plan};
use tools_common::expand_home;

use crate::cli::CleanupArgs;
use crate::summary::{header_lines, outcome_line, skip_line, summary_lines};

pub fn build_config(args: &CleanupArgs) -> log_cleanup::Result<CleanupConfig> {
    let mode = if args.delete { Mode::Delete } else { Mode::DryRun };
    CleanupConfig::new(&expand_home(&args.path), args.days, args.recursive, mode)
}

pub fn run_cleanup(args: &CleanupArgs) -> Result<()> {
    let config = build_config(args)?;
    let span = info_span!("log_cleanup", root = %config.root.display(), mode = config.mode.label());
    let _guard = span.enter();

    let start = Instant::now();
    let now = SystemTime::now();
    let entries = discover(&config.root, config.recursive)?;
    let plan = plan(entries, now, config.days);
    info!(
        candidates = plan.candidates,
        eligible = plan.eligible.len(),
        eligible_bytes = plan.eligible_bytes(),
        "scan complete"
    );

    for (path, error) in &plan.skipped {
        println!("{}", skip_line(path, error));
    }
    for line in header_lines(&config, &plan) {
        println!("{line}");
    }
    println!();

    let summary = execute(&plan, config.mode, &mut FsRemover, |file, outcome| {
        println!("{}", outcome_line(now, file, outcome));
    });
    info!(
        deleted = summary.deleted,
        failed = summary.failed,
        duration_ms = start.elapsed().as_millis(),
        "cleanup complete"
    );

    println!();
    for line in summary_lines(config.mode, &summary) {
        println!("{line}");
    }
    Ok(())
}
