//! Age-based cleanup of `.log`/`.txt` files.
//!
//! Discovery and eligibility are pure with respect to the filesystem; only
//! [`execute`] in [`Mode::Delete`] removes anything.

pub mod cleanup;
pub mod config;
mod error;
pub mod scan;

pub use cleanup::{
    CleanupPlan, CleanupSummary, DeleteOutcome, FsRemover, Remover, age_days, cutoff, execute,
    plan,
};
pub use config::{CleanupConfig, Mode};
pub use error::{CleanupError, Result};
pub use scan::{LOG_EXTENSIONS, LogFile, ScanEntry, discover, has_log_extension};
