//! Ambient infrastructure shared by the admin tools.
//!
//! The tools themselves (`csv-audit`, `disk-report`, `log-cleanup`) never
//! depend on each other. This crate only carries what every binary needs:
//! logging bootstrap, the global logging flags, byte formatting, and the
//! console table style.

pub mod cli;
pub mod format;
pub mod logging;
pub mod paths;
pub mod table;

pub use cli::LoggingArgs;
pub use format::{free_percent, human_bytes, truncate_display};
pub use logging::{LogConfig, LogFormat, init_logging};
pub use paths::expand_home;

/// Process exit codes shared by all tools.
pub mod exit {
    /// Run completed (per-item failures included).
    pub const SUCCESS: i32 = 0;
    /// Unexpected internal error.
    pub const FAILURE: i32 = 1;
    /// Invalid arguments, missing or mistyped input path, malformed input.
    pub const USAGE: i32 = 2;
    /// Interrupted by the user (Ctrl-C).
    pub const INTERRUPTED: i32 = 130;
}
