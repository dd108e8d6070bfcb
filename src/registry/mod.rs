//! Route registry subsystem.
//!
//! # Data Flow
//! ```text
//! Registry Construction (first access):
//!     node.rs (RouteNode, TitleStrategy, PlanRef)
//!     → networks.rs (per-network trees, shared subtrees via Arc)
//!     → Freeze behind LazyLock as immutable registry
//!
//! Resolution (resolver module):
//!     registry_for(network) → root RouteNode → descend children
//! ```
//!
//! # Design Decisions
//! - Registry built once, immutable for the process lifetime
//! - Shared route families (liquid reuses bitcoin's block/address/tx) are the
//!   same Arc, never structural copies
//! - Capabilities are a closed enum, not free-form string keys
//! - Title computation is a declared strategy variant, not a runtime
//!   function-or-string check

pub mod networks;
pub mod node;

pub use networks::{registry_for, Network, NetworkRegistry};
pub use node::{
    Capability, FallbackAssets, NetworkMode, PlanKind, PlanRef, RouteNode, TitleStrategy,
};
