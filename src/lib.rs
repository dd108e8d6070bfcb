//! Link-preview route resolution library.
//!
//! # Architecture Overview
//!
//! ```text
//!  (network, path, capability)
//!        │
//!        ▼
//!  ┌──────────┐     ┌──────────┐
//!  │ resolver │────▶│ registry │   immutable per-network route trees
//!  └────┬─────┘     └──────────┘
//!       │ Match { render, title, fallbacks, params, plan }
//!       ▼
//!  ┌──────────┐     ┌──────────┐
//!  │  fetch   │────▶│ upstream │   esplora / mempool REST APIs
//!  │  plans   │     │ REST API │
//!  └──────────┘     └──────────┘
//! ```
//!
//! Resolution is synchronous and pure: it only reads the immutable registry, so it
//! is safe to call concurrently without synchronization. Data-fetch plans are
//! async; each upstream failure degrades to a default value instead of aborting
//! the whole plan.

pub mod config;
pub mod fetch;
pub mod observability;
pub mod registry;
pub mod resolver;

pub use config::schema::UnfurlerConfig;
pub use fetch::client::FetchClient;
pub use registry::{Capability, Network, NetworkMode};
pub use resolver::{resolve, Match};
