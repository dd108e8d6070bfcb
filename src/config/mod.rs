//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! TOML file
//!     → loader.rs (read + parse)
//!     → validation.rs (URL sanity checks)
//!     → schema.rs types, frozen for the process lifetime
//! ```
//!
//! # Design Decisions
//! - Every section has serde defaults; an empty file is a valid config
//! - Validation is a separate pass so parse errors and semantic errors
//!   surface distinctly

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ApiConfig, UnfurlerConfig};
