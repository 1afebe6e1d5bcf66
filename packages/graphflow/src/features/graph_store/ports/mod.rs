//! Graph store port - the one query primitive this core issues
//!
//! The application layer depends on this trait, never on a concrete store;
//! any backend that can answer the one-hop neighbor query can drive the
//! traversal.

use async_trait::async_trait;

use crate::errors::Result;
use crate::shared::models::{Edge, EdgeDirection, EdgeKind, Node, NodeId};

/// Asynchronous neighbor-query port
///
/// One query is issued per DFS node expansion. Implementations must
/// deduplicate results by edge id: a neighbor reachable over two parallel
/// edges of the same kind yields two entries (one per edge), never a
/// product blow-up from a third query dimension.
///
/// # Errors
///
/// Any underlying query failure is fatal for the evaluation that issued it;
/// callers propagate it synchronously and never retry.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Return the (neighbor, connecting-edge) pairs one hop away from
    /// `node` along edges of `kind` in `direction`, in store order.
    async fn neighbors(
        &self,
        node: NodeId,
        kind: EdgeKind,
        direction: EdgeDirection,
    ) -> Result<Vec<(Node, Edge)>>;
}
