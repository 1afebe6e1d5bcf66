/*
 * graphflow - Flow-analysis core of a static-analysis query toolkit
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Node, Edge, FlowStream, Column, Table)
 * - features/    : Vertical slices (graph_store -> flow)
 *
 * Answers reachability questions over a program property graph:
 * "is there a path from any source node to any sink node, optionally
 * blocked by a barrier node, along a chosen graph relation?"
 *
 * The traversal itself is a synchronous recursive DFS; the only
 * concurrency boundary is the blocking adapter over the asynchronous
 * graph-store query port.
 */

pub mod errors;
pub mod features;
pub mod shared;

pub use errors::{ErrorKind, FlowError, Result};

// Shared model re-exports
pub use shared::models::{
    Column, Edge, EdgeDirection, EdgeId, EdgeKind, FlowPath, FlowStep, FlowStream, Node, NodeId,
    NodeKind, Row, Table,
};

// Graph store feature
pub use features::graph_store::application::NeighborProvider;
pub use features::graph_store::infrastructure::MemoryGraphStore;
pub use features::graph_store::ports::GraphStore;

// Flow feature
pub use features::flow::application::{
    DataFlowFeatures, DataFlowQuery, TaintFlowFeatures, TaintFlowQuery,
};
pub use features::flow::infrastructure::{CfgTraverse, DfgTraverse, EulerFlow, HamiltonFlow};
pub use features::flow::ports::{FlowEnumerator, TraverseStrategy};
