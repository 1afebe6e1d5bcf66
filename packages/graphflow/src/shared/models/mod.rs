//! Shared models
//!
//! The graph value objects this core consumes (`Node`, `Edge`), the walk
//! objects it produces (`FlowStep`, `FlowStream`, `FlowPath`), and the thin
//! relational objects the query engine hands in (`Column`, `Table`).
//!
//! Nodes and edges are read-only query results; this core never creates,
//! mutates, or deletes graph elements.

mod column;
mod edge;
mod node;
mod step;
mod table;

pub use column::Column;
pub use edge::{Edge, EdgeDirection, EdgeId, EdgeKind};
pub use node::{Node, NodeId, NodeKind};
pub use step::{FlowPath, FlowStep, FlowStream};
pub use table::{Row, Table};
