//! Structured logging using **tracing**.
//!
//! All log output goes to stderr as JSON, keeping stdout clean for the
//! `--json` summary. Filtering is controlled via `RUST_LOG`.

use tracing::{info, warn};

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=enumgen=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}
