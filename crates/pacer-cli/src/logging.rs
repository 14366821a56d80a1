//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! Priority for the filter:
//! 1. `--log-level` CLI flag
//! 2. `PACER_LOG` environment variable (any `EnvFilter` directive)
//! 3. `info`
//!
//! Logs go to STDERR.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

const ENV_VAR: &str = "PACER_LOG";

/// Initialise the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(level_directive(lvl)),
        None => EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

fn level_directive(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
