//! Global logging flags flattened into every tool's argument parser.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

/// CLI log level choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl LoggingArgs {
    /// Build logging configuration from the flags with consistent precedence.
    ///
    /// `--log-level` beats `-v/-q`, and either of them beats `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_timestamps = self.log_timestamps;
        config.with_target = config.level_filter >= LevelFilter::DEBUG;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }

    /// Apply the color choice globally and start the subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn init(&self) -> io::Result<()> {
        self.color.write_global();
        crate::logging::init_logging(&self.log_config())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    #[test]
    fn explicit_level_disables_env_filter() {
        let cli = TestCli::parse_from(["tool", "--log-level", "debug"]);
        let config = cli.logging.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn defaults_allow_rust_log() {
        let cli = TestCli::parse_from(["tool"]);
        let config = cli.logging.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }

    #[test]
    fn timestamps_and_targets_on_request() {
        let cli = TestCli::parse_from(["tool", "--log-timestamps", "-vv"]);
        let config = cli.logging.log_config();
        assert!(config.with_timestamps);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(config.with_target);
    }

    #[test]
    fn json_format_and_log_file() {
        let cli = TestCli::parse_from(["tool", "--log-format", "json", "--log-file", "run.log"]);
        let config = cli.logging.log_config();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
        assert!(!config.with_ansi || matches!(cli.logging.color.color, ColorChoice::Always));
    }
}
