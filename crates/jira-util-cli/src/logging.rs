// Rust guideline compliant 2026-10-18

//! Tracing setup for the CLI.

use anyhow::{bail, Context, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global stderr subscriber.
///
/// # Arguments
///
/// * `log_level` - One of `error`, `warn`, `info`, `debug` (case-insensitive)
///
/// # Errors
///
/// Returns an error for an unknown level, or if a global subscriber is
/// already installed.
pub fn init_tracing(log_level: &str) -> Result<()> {
    let level = parse_log_level(log_level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the tracing subscriber")
}

/// Parses a `--log-level` value.
///
/// # Errors
///
/// Returns an error for an unknown level.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level '{}' (expected error, warn, info or debug)", other),
    }
}
