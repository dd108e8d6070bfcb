//! Per-network route registries.
//!
//! # Responsibilities
//! - Build the bitcoin, liquid and bisq route trees exactly once
//! - Alias shared route families across networks as the same Arc
//! - Map a raw network identifier to its registry (bitcoin when unrecognized)
//!
//! # Design Decisions
//! - Built lazily on first access, immutable afterwards
//! - liquid reuses bitcoin's block/address/tx subtrees; no consumer may mutate
//!   a node after construction

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::registry::node::{
    Capability, FallbackAssets, PlanKind, PlanRef, RouteNode, TitleStrategy,
};

/// The known data namespaces served by the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Bitcoin,
    Liquid,
    Bisq,
}

impl Network {
    /// Parse a raw network identifier. Unrecognized values yield `None`; the
    /// resolver treats that as bitcoin.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "bitcoin" => Some(Self::Bitcoin),
            "liquid" => Some(Self::Liquid),
            "bisq" => Some(Self::Bisq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitcoin => "bitcoin",
            Self::Liquid => "liquid",
            Self::Bisq => "bisq",
        }
    }
}

/// One network's route tree plus its default fallback assets.
#[derive(Debug)]
pub struct NetworkRegistry {
    pub fallback: FallbackAssets,
    pub root: Arc<RouteNode>,
}

const RENDER: &[Capability] = &[Capability::Render];

/// Leaf that renders a preview from one path parameter.
fn param_route(label: &'static str, plan: Option<PlanRef>) -> Arc<RouteNode> {
    Arc::new(RouteNode {
        capabilities: RENDER,
        required_params: 1,
        title: TitleStrategy::FirstParam(label),
        plan,
        ..RouteNode::default()
    })
}

/// Interior node with a section title, a fallback override and named children.
fn section_route(
    title: &'static str,
    fallback: FallbackAssets,
    children: HashMap<&'static str, Arc<RouteNode>>,
) -> Arc<RouteNode> {
    Arc::new(RouteNode {
        title: TitleStrategy::Static(title),
        fallback: Some(fallback),
        children,
        ..RouteNode::default()
    })
}

fn root(children: HashMap<&'static str, Arc<RouteNode>>) -> Arc<RouteNode> {
    Arc::new(RouteNode {
        children,
        ..RouteNode::default()
    })
}

static REGISTRIES: LazyLock<HashMap<Network, NetworkRegistry>> = LazyLock::new(|| {
    // Shared route families; liquid aliases these, it does not copy them.
    let block = param_route(
        "Block",
        Some(PlanRef {
            kind: PlanKind::Block,
            template: "block",
        }),
    );
    let address = param_route("Address", None);
    let tx = param_route("Transaction", None);

    let lightning = section_route(
        "Lightning",
        FallbackAssets {
            image: "/resources/previews/lightning.png",
            file: "/resources/img/lightning.png",
        },
        HashMap::from([
            ("node", param_route("Lightning Node", None)),
            ("channel", param_route("Lightning Channel", None)),
            (
                "nodes",
                root(HashMap::from([(
                    "isp",
                    param_route("Lightning ISP", None),
                )])),
            ),
            ("group", param_route("Lightning Node Group", None)),
        ]),
    );

    let mining = section_route(
        "Mining",
        FallbackAssets {
            image: "/resources/previews/mining.png",
            file: "/resources/img/mining.png",
        },
        HashMap::from([("pool", param_route("Mining Pool", None))]),
    );

    let bitcoin = NetworkRegistry {
        fallback: FallbackAssets {
            image: "/resources/previews/dashboard.png",
            file: "/resources/img/dashboard.png",
        },
        root: root(HashMap::from([
            ("block", Arc::clone(&block)),
            ("address", Arc::clone(&address)),
            ("tx", Arc::clone(&tx)),
            ("lightning", lightning),
            ("mining", mining),
        ])),
    };

    // Only block, address & tx are supported on liquid.
    let liquid = NetworkRegistry {
        fallback: FallbackAssets {
            image: "/resources/liquid/liquid-network-preview.png",
            file: "/resources/img/liquid",
        },
        root: root(HashMap::from([
            ("block", block),
            ("address", address),
            ("tx", tx),
        ])),
    };

    // No routes supported on bisq.
    let bisq = NetworkRegistry {
        fallback: FallbackAssets {
            image: "/resources/bisq/bisq-markets-preview.png",
            file: "/resources/img/bisq.png",
        },
        root: root(HashMap::new()),
    };

    HashMap::from([
        (Network::Bitcoin, bitcoin),
        (Network::Liquid, liquid),
        (Network::Bisq, bisq),
    ])
});

/// Registry for a raw network identifier; bitcoin's when unrecognized.
pub fn registry_for(network: &str) -> &'static NetworkRegistry {
    let network = Network::from_id(network).unwrap_or(Network::Bitcoin);
    &REGISTRIES[&network]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_network_falls_back_to_bitcoin() {
        let registry = registry_for("dogecoin");
        assert_eq!(registry.fallback.image, "/resources/previews/dashboard.png");
        assert!(registry.root.child("lightning").is_some());
    }

    #[test]
    fn liquid_aliases_bitcoin_subtrees() {
        let bitcoin = registry_for("bitcoin");
        let liquid = registry_for("liquid");
        for family in ["block", "address", "tx"] {
            let a = bitcoin.root.child(family).unwrap();
            let b = liquid.root.child(family).unwrap();
            assert!(Arc::ptr_eq(a, b), "{family} should be shared, not copied");
        }
    }

    #[test]
    fn liquid_has_no_lightning_or_mining() {
        let liquid = registry_for("liquid");
        assert!(liquid.root.child("lightning").is_none());
        assert!(liquid.root.child("mining").is_none());
    }

    #[test]
    fn bisq_has_no_routes() {
        let bisq = registry_for("bisq");
        assert!(bisq.root.children.is_empty());
        assert_eq!(bisq.fallback.image, "/resources/bisq/bisq-markets-preview.png");
    }

    #[test]
    fn block_route_carries_plan_ref() {
        let block = registry_for("bitcoin").root.child("block").unwrap();
        let plan = block.plan.expect("block route should reference a plan");
        assert_eq!(plan.kind, PlanKind::Block);
        assert_eq!(plan.template, "block");
        assert_eq!(block.required_params, 1);
    }
}
