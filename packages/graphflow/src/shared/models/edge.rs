//! Graph edge model

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// Edge identifier type alias
pub type EdgeId = u64;

/// The two edge relations this core consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Value production/consumption relation
    #[serde(rename = "dfg")]
    DataFlow,
    /// Possible execution order relation
    #[serde(rename = "cfg")]
    ControlFlow,
}

impl EdgeKind {
    /// Stable tag used by the graph store
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::DataFlow => "dfg",
            EdgeKind::ControlFlow => "cfg",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a one-hop neighbor query relative to the queried node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Edges arriving at the node; the neighbor is the edge source
    Incoming,
    /// Edges leaving the node; the neighbor is the edge target
    Outgoing,
}

/// A directed, typed relation instance between two nodes
///
/// Edges carry their own stable identifier; parallel edges between the same
/// node pair are distinct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source_id: NodeId,
    pub target_id: NodeId,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn new(id: EdgeId, source_id: NodeId, target_id: NodeId, kind: EdgeKind) -> Self {
        Self {
            id,
            source_id,
            target_id,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kind_store_tags() {
        assert_eq!(EdgeKind::DataFlow.as_str(), "dfg");
        assert_eq!(EdgeKind::ControlFlow.as_str(), "cfg");
    }

    #[test]
    fn test_edge_kind_round_trip() {
        let json = serde_json::to_string(&EdgeKind::DataFlow).unwrap();
        assert_eq!(json, "\"dfg\"");
        let kind: EdgeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, EdgeKind::DataFlow);
    }
}
