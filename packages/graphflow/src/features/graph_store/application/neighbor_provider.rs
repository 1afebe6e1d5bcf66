//! NeighborProvider - blocking adapter over the asynchronous store port
//!
//! The traversal is a synchronous recursive DFS, while the store query is
//! asynchronous. This adapter owns a dedicated current-thread tokio runtime
//! and resolves each query with `block_on`: the calling DFS frame suspends
//! until that one query completes, then resumes deterministically. At most
//! one query is in flight at a time from this core's perspective.
//!
//! There is no timeout and no cancellation; a query that never resolves
//! blocks the traversal indefinitely.

use std::sync::Arc;

use crate::errors::{FlowError, Result};
use crate::features::graph_store::ports::GraphStore;
use crate::shared::models::{Edge, EdgeDirection, EdgeKind, Node, NodeId};

/// Synchronous one-hop neighbor queries over an async graph store
pub struct NeighborProvider {
    store: Arc<dyn GraphStore>,
    runtime: tokio::runtime::Runtime,
}

impl NeighborProvider {
    /// Wrap a store behind a fresh current-thread runtime
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::Runtime` if the runtime cannot be built.
    pub fn new(store: Arc<dyn GraphStore>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| FlowError::runtime("failed to build blocking runtime").with_source(e))?;
        Ok(Self { store, runtime })
    }

    /// Block until the store answers the neighbor query
    ///
    /// Store failures surface synchronously and are not retried.
    pub fn neighbors(
        &self,
        node: NodeId,
        kind: EdgeKind,
        direction: EdgeDirection,
    ) -> Result<Vec<(Node, Edge)>> {
        self.runtime
            .block_on(self.store.neighbors(node, kind, direction))
    }
}

impl std::fmt::Debug for NeighborProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeighborProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::graph_store::infrastructure::MemoryGraphStore;
    use crate::shared::models::NodeKind;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl GraphStore for FailingStore {
        async fn neighbors(
            &self,
            _node: NodeId,
            _kind: EdgeKind,
            _direction: EdgeDirection,
        ) -> Result<Vec<(Node, Edge)>> {
            Err(FlowError::store("backend unreachable"))
        }
    }

    #[test]
    fn test_blocking_query_resolves_synchronously() {
        let mut store = MemoryGraphStore::new();
        store.add_node(Node::new(1, NodeKind::Variable));
        store.add_node(Node::new(2, NodeKind::Variable));
        store.add_edge(Edge::new(10, 1, 2, EdgeKind::DataFlow));

        let provider = NeighborProvider::new(Arc::new(store)).unwrap();
        let steps = provider
            .neighbors(1, EdgeKind::DataFlow, EdgeDirection::Outgoing)
            .unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].0.id, 2);
    }

    #[test]
    fn test_store_error_propagates_synchronously() {
        let provider = NeighborProvider::new(Arc::new(FailingStore)).unwrap();
        let err = provider
            .neighbors(1, EdgeKind::DataFlow, EdgeDirection::Incoming)
            .unwrap_err();
        assert_eq!(err.kind, crate::errors::ErrorKind::Store);
    }
}
