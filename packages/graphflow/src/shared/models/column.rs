//! Column: an unordered, membership-testable node set

use rustc_hash::FxHashSet;

use super::node::{Node, NodeId};

/// A named set of candidate nodes (sources, sinks, or barriers)
///
/// Membership is keyed by node id. Iteration follows insertion order so a
/// caller-supplied candidate order survives into result order. Only the
/// taint descriptor's narrowing phase mutates a column after construction.
#[derive(Debug, Clone, Default)]
pub struct Column {
    name: String,
    ids: FxHashSet<NodeId>,
    nodes: Vec<Node>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ids: FxHashSet::default(),
            nodes: Vec::new(),
        }
    }

    pub fn from_nodes(name: impl Into<String>, nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut column = Self::new(name);
        for node in nodes {
            column.add(node);
        }
        column
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a node; returns false if it was already present
    pub fn add(&mut self, node: Node) -> bool {
        if !self.ids.insert(node.id) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.ids.contains(&node.id)
    }

    pub fn contains_id(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::NodeKind;

    #[test]
    fn test_column_membership() {
        let column = Column::from_nodes(
            "sinks",
            vec![Node::new(1, NodeKind::Statement), Node::new(2, NodeKind::Statement)],
        );
        assert!(column.contains_id(1));
        assert!(!column.contains_id(3));
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_column_add_deduplicates() {
        let mut column = Column::new("narrowed");
        assert!(column.add(Node::new(7, NodeKind::Variable)));
        assert!(!column.add(Node::new(7, NodeKind::Variable)));
        assert_eq!(column.len(), 1);
    }

    #[test]
    fn test_column_iterates_in_insertion_order() {
        let mut column = Column::new("sources");
        column.add(Node::new(3, NodeKind::Variable));
        column.add(Node::new(1, NodeKind::Variable));
        column.add(Node::new(2, NodeKind::Variable));
        let ids: Vec<u64> = column.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
