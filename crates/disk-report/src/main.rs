//! Disk reporter CLI.

use clap::Parser;
use tracing::warn;

use disk_report::DiskError;
use tools_common::exit;

mod cli;
mod commands;
mod summary;

use crate::cli::Cli;
use crate::commands::run_report;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::FAILURE);
    }
    if let Err(error) = ctrlc::set_handler(|| {
        eprintln!();
        eprintln!("Cancelled.");
        std::process::exit(exit::INTERRUPTED);
    }) {
        warn!(%error, "could not install interrupt handler");
    }
    let exit_code = match run_report(&cli.report) {
        Ok(()) => exit::SUCCESS,
        Err(error) => report_failure(&error),
    };
    std::process::exit(exit_code);
}

fn report_failure(error: &anyhow::Error) -> i32 {
    let code = error
        .downcast_ref::<DiskError>()
        .map_or(exit::FAILURE, DiskError::exit_code);
    if code == exit::USAGE {
        eprintln!("error: {error:#}");
    } else {
        eprintln!("unexpected error: {error:#}");
    }
    code
}
