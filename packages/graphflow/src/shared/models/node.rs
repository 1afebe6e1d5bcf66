//! Graph node model

use serde::{Deserialize, Serialize};

/// Node identifier type alias
pub type NodeId = u64;

/// Program entity kind stored in the property graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Statement,
    Expression,
    Variable,
    Constant,
    Type,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Statement => "statement",
            NodeKind::Expression => "expression",
            NodeKind::Variable => "variable",
            NodeKind::Constant => "constant",
            NodeKind::Type => "type",
        }
    }
}

/// One program entity in the property graph
///
/// Nodes are immutable values materialized by the graph store. Identity is
/// the stable `id`; equality and hashing follow it so that node sets and
/// visited sets agree with the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            metadata: serde_json::Value::Null,
        }
    }

    pub fn with_name(id: NodeId, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: Some(name.into()),
            metadata: serde_json::Value::Null,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
