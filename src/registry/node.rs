//! Route-tree node types.
//!
//! # Responsibilities
//! - Define the immutable node shape shared by every network tree
//! - Express capabilities, title strategies and plan references as closed enums
//!
//! # Design Decisions
//! - `&'static str` throughout: registry content is compiled in, never loaded
//! - Children keyed by literal path segment; one descent consumes one segment
//! - No behavior beyond trivial accessors, the resolver owns the algorithm

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// A named resolvable property a route node may declare.
///
/// Resolution is always performed against exactly one requested capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// The node can produce a server-rendered preview.
    Render,
}

/// Chain flavor encoded as an optional leading path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    #[default]
    Mainnet,
    Testnet,
    Signet,
}

impl NetworkMode {
    /// Parse a path segment into a non-default mode, if it names one.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "testnet" => Some(Self::Testnet),
            "signet" => Some(Self::Signet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Signet => "signet",
        }
    }
}

/// Preview image plus on-page image, inherited down the tree until overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackAssets {
    pub image: &'static str,
    pub file: &'static str,
}

/// How a node's title is produced from the leftover path segments.
///
/// Declared at registry construction time; the resolver never inspects whether a
/// field "is a function".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleStrategy {
    /// No title; resolves to the empty string.
    #[default]
    None,
    /// A fixed title independent of the path.
    Static(&'static str),
    /// `"{label}: {first leftover segment}"`, empty label-only when no segment.
    FirstParam(&'static str),
}

impl TitleStrategy {
    /// Compute the title for the given leftover segments.
    pub fn title(&self, params: &[String]) -> String {
        match self {
            Self::None => String::new(),
            Self::Static(title) => (*title).to_string(),
            Self::FirstParam(label) => match params.first() {
                Some(first) => format!("{label}: {first}"),
                None => format!("{label}:"),
            },
        }
    }
}

/// The fixed set of known data-fetch plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// Block preview: summary + txids, with height→hash resolution.
    Block,
}

/// Tagged reference to a data-fetch plan plus the preview template it feeds.
///
/// Dispatched through the fixed table in `fetch::plans`; nodes never embed
/// executable procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanRef {
    pub kind: PlanKind,
    pub template: &'static str,
}

/// One node of a per-network route tree.
#[derive(Debug, Default)]
pub struct RouteNode {
    /// Capabilities this node satisfies, if any.
    pub capabilities: &'static [Capability],
    /// Minimum leftover segments required for this node to count as satisfied.
    pub required_params: usize,
    /// Title strategy applied to the leftover segments.
    pub title: TitleStrategy,
    /// Image used only when resolution ends exactly here with no leftovers.
    pub static_img: Option<&'static str>,
    /// Optional data-fetch plan reference.
    pub plan: Option<PlanRef>,
    /// Fallback override inherited by descendants until overridden again.
    pub fallback: Option<FallbackAssets>,
    /// Literal path segment → child node. Shared subtrees are the same Arc.
    pub children: HashMap<&'static str, Arc<RouteNode>>,
}

impl RouteNode {
    /// Whether this node declares the requested capability.
    pub fn declares(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Look up a child by literal path segment.
    pub fn child(&self, segment: &str) -> Option<&Arc<RouteNode>> {
        self.children.get(segment)
    }
}
