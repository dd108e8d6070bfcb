//! Route resolution subsystem.
//!
//! # Data Flow
//! ```text
//! (network id, raw path, capability)
//!     → engine.rs (split path, consume preview/mode prefixes)
//!     → registry (descend literal children, inherit fallbacks)
//!     → Return: Match (render decision, title, fallbacks, params, plan ref)
//! ```
//!
//! # Design Decisions
//! - Total: always returns a Match, never fails, no I/O
//! - Pure function of (registry, inputs); safe to call concurrently
//! - Descent stops at the FIRST node declaring the requested capability,
//!   even when deeper, more specific children exist

pub mod engine;

pub use engine::{resolve, resolve_in, Match};
