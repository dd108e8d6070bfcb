//! The route resolution algorithm.
//!
//! # Responsibilities
//! - Split the raw path and consume the `preview` and network-mode prefixes
//! - Walk the network's route tree, one full segment per descent step
//! - Produce a Match with render decision, title, fallbacks and leftovers
//!
//! # Design Decisions
//! - A capability-bearing ancestor wins over any deeper descendant: the walk
//!   never looks past the first satisfying node
//! - Unrecognized networks resolve against bitcoin's registry
//! - `required_params` defaults to zero; the comparison is explicit

use serde::Serialize;
use std::collections::VecDeque;

use crate::registry::{registry_for, Capability, NetworkMode, NetworkRegistry, PlanRef};

/// The resolver's output: everything needed to decide which preview to build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Whether a server-rendered preview should be produced.
    pub render: bool,
    /// Preview title; empty when no node along the path provides one.
    pub title: String,
    /// Preview image inherited from the deepest override along the path.
    pub fallback_img: String,
    /// On-page image paired with `fallback_img`.
    pub fallback_file: String,
    /// Set only when resolution ends exactly on a node with no leftovers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_img: Option<String>,
    /// Chain flavor consumed from the path, mainnet when absent.
    pub network_mode: NetworkMode,
    /// Leftover path segments, present only for satisfied matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
    /// Data-fetch plan reference carried over from the matched node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanRef>,
}

/// Resolve a raw path against the named network's registry.
///
/// Total and pure: always returns a Match, defaulting to a non-rendering result
/// for unresolvable input.
pub fn resolve(network: &str, raw_path: &str, capability: Capability) -> Match {
    resolve_in(registry_for(network), raw_path, capability)
}

/// Resolve against an explicit registry. Split out so tests can exercise the
/// walk on hand-built trees.
pub fn resolve_in(registry: &NetworkRegistry, raw_path: &str, capability: Capability) -> Match {
    let mut parts: VecDeque<&str> = raw_path.split('/').filter(|p| !p.is_empty()).collect();

    // A leading "preview" segment is routing noise from the unfurl entrypoint.
    if parts.front() == Some(&"preview") {
        parts.pop_front();
    }

    let mut network_mode = NetworkMode::default();
    if let Some(mode) = parts.front().and_then(|p| NetworkMode::from_segment(p)) {
        network_mode = mode;
        parts.pop_front();
    }

    let mut current = registry.root.as_ref();
    let mut fallback = registry.fallback;

    // Traverse until we run out of path or tree, or hit a satisfying node.
    while !current.declares(capability) {
        let Some(next) = parts.front() else { break };
        let Some(child) = current.child(next) else { break };
        current = child.as_ref();
        parts.pop_front();
        if let Some(override_assets) = current.fallback {
            fallback = override_assets;
        }
    }

    let leftovers: Vec<String> = parts.into_iter().map(str::to_string).collect();

    let mut matched = Match {
        render: false,
        title: String::new(),
        fallback_img: fallback.image.to_string(),
        fallback_file: fallback.file.to_string(),
        static_img: None,
        network_mode,
        params: None,
        plan: None,
    };

    // Enough leftover segments for the node to count as satisfied.
    if current.declares(capability) && leftovers.len() >= current.required_params {
        matched.render = true;
        matched.plan = current.plan;
        matched.params = Some(leftovers.clone());
    }

    // Static images apply to exact matches only.
    if leftovers.is_empty() {
        matched.static_img = current.static_img.map(str::to_string);
    }

    matched.title = current.title.title(&leftovers);

    matched
}
