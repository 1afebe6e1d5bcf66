//! Infrastructure: MemoryGraphStore - in-memory adjacency backend
//!
//! Reference implementation of the `GraphStore` port. Provides O(1) access
//! to nodes by id and to edges by source/target id. Neighbor order is edge
//! insertion order, which the traversal preserves into result order.

use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::errors::{FlowError, Result};
use crate::features::graph_store::ports::GraphStore;
use crate::shared::models::{Edge, EdgeDirection, EdgeKind, Node, NodeId};

/// In-memory property graph store
#[derive(Debug, Default)]
pub struct MemoryGraphStore {
    /// All nodes indexed by id
    nodes_by_id: FxHashMap<NodeId, Node>,

    /// Forward edges: source_id -> Vec<Edge>
    edges_from: FxHashMap<NodeId, Vec<Edge>>,

    /// Backward edges: target_id -> Vec<Edge>
    edges_to: FxHashMap<NodeId, Vec<Edge>>,

    edge_count: usize,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any previous node with the same id
    pub fn add_node(&mut self, node: Node) {
        self.nodes_by_id.insert(node.id, node);
    }

    /// Insert an edge; endpoints are resolved lazily at query time
    pub fn add_edge(&mut self, edge: Edge) {
        self.edge_count += 1;
        self.edges_from
            .entry(edge.source_id)
            .or_default()
            .push(edge.clone());
        self.edges_to.entry(edge.target_id).or_default().push(edge);
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes_by_id.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes_by_id.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn resolve(&self, edge: &Edge, direction: EdgeDirection) -> Result<Node> {
        let neighbor_id = match direction {
            EdgeDirection::Incoming => edge.source_id,
            EdgeDirection::Outgoing => edge.target_id,
        };
        self.nodes_by_id.get(&neighbor_id).cloned().ok_or_else(|| {
            FlowError::store(format!(
                "edge {} references unknown node {}",
                edge.id, neighbor_id
            ))
        })
    }
}

#[async_trait]
impl GraphStore for MemoryGraphStore {
    async fn neighbors(
        &self,
        node: NodeId,
        kind: EdgeKind,
        direction: EdgeDirection,
    ) -> Result<Vec<(Node, Edge)>> {
        let edges = match direction {
            EdgeDirection::Incoming => self.edges_to.get(&node),
            EdgeDirection::Outgoing => self.edges_from.get(&node),
        };

        let mut seen: FxHashSet<u64> = FxHashSet::default();
        let mut steps = Vec::new();
        for edge in edges.into_iter().flatten() {
            if edge.kind != kind || !seen.insert(edge.id) {
                continue;
            }
            let neighbor = self.resolve(edge, direction)?;
            steps.push((neighbor, edge.clone()));
        }
        Ok(steps)
    }
}
