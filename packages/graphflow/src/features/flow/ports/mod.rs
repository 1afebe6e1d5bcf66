//! Flow ports - the two capabilities the enumeration composes
//!
//! A traversal is the product of two independent choices: how to expand a
//! node (`TraverseStrategy`: which edge kind, which direction) and how to
//! avoid repeats (`FlowEnumerator`: edge-unique or node-unique). Either
//! axis can vary without touching the other, which is what lets one
//! descriptor serve both flow kinds.

use crate::errors::Result;
use crate::features::graph_store::application::NeighborProvider;
use crate::shared::models::{Edge, FlowStream, Node, NodeId};

/// Node-expansion capability
///
/// Stateless given the provider; returns the (neighbor, edge) pairs the
/// walk may extend through, in store order.
pub trait TraverseStrategy: Send + Sync {
    fn neighbors(&self, provider: &NeighborProvider, node: NodeId) -> Result<Vec<(Node, Edge)>>;
}

/// Path-enumeration capability
///
/// Runs a depth-first search from `origin`, expanding through `strategy`,
/// and returns every committed walk, not just the first. Traversal state is
/// local to one `apply` call; implementations are re-entrant.
pub trait FlowEnumerator: Send + Sync {
    fn apply(
        &self,
        origin: &Node,
        strategy: &dyn TraverseStrategy,
        provider: &NeighborProvider,
    ) -> Result<Vec<FlowStream>>;
}
