//! The fixed table of data-fetch plans.
//!
//! # Responsibilities
//! - Dispatch a PlanRef to its implementation
//! - Orchestrate upstream calls per plan, concurrently where independent
//! - Assemble preview payloads, degrading missing parts instead of failing
//!
//! # Design Decisions
//! - Plans are looked up by tag, never embedded in registry data
//! - Fan-out/join: neither upstream call feeds the other's inputs
//! - A failed height lookup passes the unresolved identifier downstream
//!   (observable as a non-hash canonical path) and logs a warning

use futures_util::future::join;
use serde::Serialize;
use serde_json::Value;

use crate::config::schema::ApiConfig;
use crate::fetch::client::FetchClient;
use crate::registry::{PlanKind, PlanRef};

/// Canonical length of a hex block hash.
pub const BLOCK_HASH_LEN: usize = 64;

/// Payload for the "block" preview template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPreview {
    /// Block summary from the mempool API; null when the fetch degraded.
    pub block: Value,
    /// Transaction-id list from the esplora API; null when the fetch degraded.
    pub transactions: Value,
    /// Canonical explorer path derived from the resolved hash.
    pub canonical_path: String,
}

/// Output of any data-fetch plan, shaped for its preview template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlanData {
    Block(BlockPreview),
}

/// Execute the referenced plan with the leftover path parameters.
///
/// Returns `None` only when the parameters cannot feed the plan at all (e.g.
/// no block identifier); upstream failures degrade fields instead.
pub async fn run_plan(
    plan: PlanRef,
    params: &[String],
    client: &FetchClient,
    api: &ApiConfig,
) -> Option<PlanData> {
    match plan.kind {
        PlanKind::Block => block_preview(params, client, api).await.map(PlanData::Block),
    }
}

async fn block_preview(
    params: &[String],
    client: &FetchClient,
    api: &ApiConfig,
) -> Option<BlockPreview> {
    let mut block_id = params.first()?.clone();

    if block_id.len() != BLOCK_HASH_LEN {
        // Treat the identifier as a height and resolve it to a hash. On lookup
        // failure the unresolved value flows onward unchanged.
        let url = format!("{}/block-height/{}", api.esplora, block_id);
        block_id = client.text_or(&url, block_id).await;
        if block_id.len() != BLOCK_HASH_LEN {
            tracing::warn!(block_id = %block_id, "height lookup did not yield a block hash");
        }
    }

    let (block, transactions) = join(
        client.json(&format!("{}/block/{}", api.mempool, block_id)),
        client.json(&format!("{}/block/{}/txids", api.esplora, block_id)),
    )
    .await;

    Some(BlockPreview {
        block,
        transactions,
        canonical_path: format!("/block/{block_id}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_params_yield_no_payload() {
        let api = ApiConfig::default();
        let client = FetchClient::new();
        let plan = PlanRef {
            kind: PlanKind::Block,
            template: "block",
        };
        assert_eq!(run_plan(plan, &[], &client, &api).await, None);
    }
}
