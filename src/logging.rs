//! Logging init for binaries and test harnesses embedding the client.
//!
//! The client itself only emits `tracing` events; installing a subscriber is
//! left to the application. These helpers cover the common case.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,account_api_client=debug";

/// Initialize structured logging to stderr, filtered by `RUST_LOG`.
///
/// Returns Err if a global subscriber is already installed, so callers can
/// ignore repeated initialisation.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))?;

    tracing::debug!("account client logging initialized");

    Ok(())
}

/// Initialize logging for tests: captured by the test harness, never fails.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("account_api_client=debug"))
        .with_test_writer()
        .try_init();
}
