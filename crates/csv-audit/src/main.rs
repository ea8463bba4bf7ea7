//! CSV auditor CLI.

use clap::Parser;

use csv_audit::AuditError;
use tools_common::exit;

mod cli;
mod commands;
mod summary;

use crate::cli::Cli;
use crate::commands::run_audit;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::FAILURE);
    }
    let exit_code = match run_audit(&cli.audit) {
        Ok(()) => exit::SUCCESS,
        Err(error) => report_failure(&error),
    };
    std::process::exit(exit_code);
}

/// Print the error and map it to an exit code.
fn report_failure(error: &anyhow::Error) -> i32 {
    let code = error
        .downcast_ref::<AuditError>()
        .map_or(exit::FAILURE, AuditError::exit_code);
    if code == exit::USAGE {
        eprintln!("error: {error:#}");
    } else {
        eprintln!("unexpected error: {error:#}");
    }
    code
}
