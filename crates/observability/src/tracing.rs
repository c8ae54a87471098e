//! Tracing/logging initialization.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The global subscriber could not be installed (usually: one is already set).
#[derive(Debug, Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct InitError(String);

/// Initialize tracing/logging for the process.
///
/// Must complete before any listener is opened: the serving code logs its
/// failure paths and assumes a usable subscriber. Callers treat `Err` as
/// fatal.
pub fn init() -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init()
        .map_err(|e| InitError(e.to_string()))
}
