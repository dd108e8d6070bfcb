//! Upstream data-fetch subsystem.
//!
//! # Data Flow
//! ```text
//! Match.plan (PlanRef)
//!     → plans.rs (dispatch on PlanKind, fan-out/join upstream calls)
//!     → client.rs (resilient GET: default value on any failure)
//!     → Return: assembled payload with degraded fields, never an error
//! ```
//!
//! # Design Decisions
//! - No error crosses the fetch boundary; callers supply defaults
//! - Independent upstream calls within one plan are issued concurrently
//! - Connections are pooled inside the shared reqwest client; callers only
//!   read from the pool, never mutate it

pub mod client;
pub mod plans;

pub use client::FetchClient;
pub use plans::{run_plan, BlockPreview, PlanData, BLOCK_HASH_LEN};
