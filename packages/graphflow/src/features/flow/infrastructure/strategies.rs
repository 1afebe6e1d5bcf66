//! Traversal strategies - which relation a walk follows, and which way
//!
//! Both strategies are stateless and interchangeable at the enumerator
//! boundary; the provider does the actual store round-trip.

use crate::errors::Result;
use crate::features::flow::ports::TraverseStrategy;
use crate::features::graph_store::application::NeighborProvider;
use crate::shared::models::{Edge, EdgeDirection, EdgeKind, Node, NodeId};

/// Data-flow policy: incoming data-flow edges
///
/// Walks backward from a use to the definitions that produce its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfgTraverse;

impl TraverseStrategy for DfgTraverse {
    fn neighbors(&self, provider: &NeighborProvider, node: NodeId) -> Result<Vec<(Node, Edge)>> {
        provider.neighbors(node, EdgeKind::DataFlow, EdgeDirection::Incoming)
    }
}

/// Control-flow policy: outgoing control-flow edges
///
/// Walks forward from a predecessor to its possible successors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CfgTraverse;

impl TraverseStrategy for CfgTraverse {
    fn neighbors(&self, provider: &NeighborProvider, node: NodeId) -> Result<Vec<(Node, Edge)>> {
        provider.neighbors(node, EdgeKind::ControlFlow, EdgeDirection::Outgoing)
    }
}
