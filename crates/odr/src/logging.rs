//! Logging bootstrap
//!
//! Structured logging through the tracing ecosystem. The filter comes from
//! the `ODR_LOG` environment variable when set, otherwise from the level
//! passed on the command line.

use anyhow::{anyhow, bail};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for a full filter directive
const LOG_ENV: &str = "ODR_LOG";

/// Initialize logging with the given default level.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}

/// Parse a log level string to a tracing Level.
pub fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => bail!("invalid log level: {level}. Use trace, debug, info, warn, or error"),
    }
}
