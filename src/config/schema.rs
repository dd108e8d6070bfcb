//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the unfurler resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct UnfurlerConfig {
    /// Upstream API base locations.
    pub api: ApiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Base URLs of the upstream data APIs consumed by data-fetch plans.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Mempool REST API base (block summaries).
    pub mempool: String,

    /// Esplora REST API base (height lookup, txid lists).
    pub esplora: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mempool: "https://mempool.space/api/v1".to_string(),
            esplora: "https://blockstream.info/api".to_string(),
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g. "info", "preview_unfurler=debug").
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
