//! Table: the result relation populated by flow descriptors

use super::node::Node;
use super::step::FlowPath;

/// One discovered flow: a source node, the sink it reaches, and the
/// connecting walk
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub source: Node,
    pub sink: Node,
    pub path: FlowPath,
}

/// The output relation of one descriptor evaluation
///
/// Created by the caller, appended to by descriptors; row order follows the
/// order walks were committed by the enumerator.
#[derive(Debug, Clone, Default)]
pub struct Table {
    name: String,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
