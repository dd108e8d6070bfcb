//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Level from config, overridable via RUST_LOG

pub mod logging;

pub use logging::init_logging;
