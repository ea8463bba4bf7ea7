//! Log cleanup CLI.

use clap::Parser;

use log_cleanup::CleanupError;
use tools_common::exit;

mod cli;
mod commands;
mod summary;

use crate::cli::Cli;
use crate::commands::run_cleanup;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::FAILURE);
    }
    let exit_code = match run_cleanup(&cli.cleanup) {
        Ok(()) => exit::SUCCESS,
        Err(error) => report_failure(&error),
    };
    std::process::exit(exit_code);
}

fn report_failure(error: &anyhow::Error) -> i32 {
    let code = error
        .downcast_ref::<CleanupError>()
        .map_or(exit::FAILURE, CleanupError::exit_code);
    if code == exit::USAGE {
        println!("ERROR: {error:#}");
    } else {
        eprintln!("unexpected error: {error:#}");
    }
    code
}
