//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem once at startup
//! - Respect RUST_LOG over the configured level

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `level` is a tracing filter directive (e.g. "info"); the RUST_LOG
/// environment variable takes precedence when set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
