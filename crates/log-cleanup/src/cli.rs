//! CLI argument definitions for log cleanup.

use std::path::PathBuf;

use clap::Parser;
use tools_common::LoggingArgs;

#[derive(Debug, Parser)]
#[command(
    name = "log-cleanup",
    version,
    about = "Clean up old log files safely (dry-run by default)"
)]
pub struct Cli {
    #[command(flatten)]
    pub cleanup: CleanupArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

#[derive(Debug, clap::Args)]
pub struct CleanupArgs {
    /// Folder containing logs to review (e.g. C:\temp\logs or /var/log/myapp).
    #[arg(long = "path", value_name = "PATH")]
    pub path: PathBuf,

    /// Delete logs older than this many days.
    #[arg(long = "days", value_name = "N", default_value_t = 30)]
    pub days: u64,

    /// Search subfolders recursively.
    #[arg(long = "recursive")]
    pub recursive: bool,

    /// Actually delete files (otherwise dry-run).
    #[arg(long = "delete")]
    pub delete: bool,
}
