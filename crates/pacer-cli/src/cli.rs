//! CLI argument parsing using `clap`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pacer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pacer",
    version,
    about = "Poll a directory on an adaptive interval until Ctrl-C.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to poll.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Wait after a failed iteration (e.g. "5s", "1m").
    #[arg(
        long,
        value_name = "DURATION",
        env = "PACER_DEFAULT_DELAY",
        default_value = "5s",
        value_parser = humantime::parse_duration
    )]
    pub default_delay: Duration,

    /// Wait after an iteration that saw no change.
    #[arg(long, value_name = "DURATION", default_value = "10s", value_parser = humantime::parse_duration)]
    pub idle_delay: Duration,

    /// Wait after an iteration that saw a change.
    #[arg(long, value_name = "DURATION", default_value = "1s", value_parser = humantime::parse_duration)]
    pub busy_delay: Duration,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PACER_LOG` or `info` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
