//! CLI argument definitions for the disk reporter.

use std::path::PathBuf;

use clap::Parser;
use tools_common::LoggingArgs;

#[derive(Parser)]
#[command(
    name = "disk-report",
    version,
    about = "Generate a disk usage report for a path; optionally export CSV",
    long_about = "Generate a disk usage report for a path; optionally export CSV.\n\n\
                  Figures describe the filesystem containing each path \
                  (free/used space on the drive), not the size of folder contents."
)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

#[derive(Debug, clap::Args)]
pub struct ReportArgs {
    /// Target path to report on (e.g. C:\ or /home/user).
    #[arg(long = "path", value_name = "PATH")]
    pub path: PathBuf,

    /// Also scan subdirectories and include them as rows.
    #[arg(long = "recursive")]
    pub recursive: bool,

    /// Max directory depth for the recursive scan.
    #[arg(
        long = "max-depth",
        value_name = "N",
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub max_depth: i64,

    /// Write the report as CSV to this path.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Include hidden (dot-prefixed) directories in the recursive scan.
    #[arg(long = "include-hidden")]
    pub include_hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["disk-report", "--path", "/"]);
        assert!(!cli.report.recursive);
        assert_eq!(cli.report.max_depth, 1);
        assert!(cli.report.csv.is_none());
        assert!(!cli.report.include_hidden);
    }

    #[test]
    fn recursive_flags() {
        let cli = Cli::parse_from([
            "disk-report",
            "--path",
            "/srv",
            "--recursive",
            "--max-depth",
            "3",
            "--include-hidden",
            "--csv",
            "out.csv",
        ]);
        assert!(cli.report.recursive);
        assert_eq!(cli.report.max_depth, 3);
        assert!(cli.report.include_hidden);
        assert_eq!(cli.report.csv, Some(PathBuf::from("out.csv")));
    }
}
