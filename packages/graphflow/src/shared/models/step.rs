//! Walk models: steps, streams, and committed paths

use super::edge::Edge;
use super::node::Node;

/// One step of a walk: a node plus the edge that reached it
///
/// The first step of any walk is the origin and carries no edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowStep {
    pub node: Node,
    pub edge: Option<Edge>,
}

impl FlowStep {
    /// The origin step of a walk
    pub fn origin(node: Node) -> Self {
        Self { node, edge: None }
    }

    pub fn new(node: Node, edge: Edge) -> Self {
        Self {
            node,
            edge: Some(edge),
        }
    }
}

/// An ordered walk committed by a flow enumerator
///
/// Under edge-unique traversal a stream never repeats an edge id; under
/// node-unique traversal it never repeats a node id. Streams are frozen at
/// commit time and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowStream {
    steps: Vec<FlowStep>,
}

impl FlowStream {
    pub fn new(steps: Vec<FlowStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[FlowStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlowStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a FlowStream {
    type Item = &'a FlowStep;
    type IntoIter = std::slice::Iter<'a, FlowStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// The node walk bound into a result row
///
/// Built incrementally while a descriptor scans a stream, then cloned into
/// the row the moment a sink is hit; the scan may keep extending its own
/// working copy afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowPath {
    nodes: Vec<Node>,
}

impl FlowPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
