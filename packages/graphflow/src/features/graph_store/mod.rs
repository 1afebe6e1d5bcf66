//! Graph store feature
//!
//! The outbound boundary of the flow core: one asynchronous neighbor-query
//! primitive (`ports::GraphStore`), a reference in-memory backend
//! (`infrastructure::MemoryGraphStore`), and the blocking adapter the
//! synchronous traversal calls through (`application::NeighborProvider`).

pub mod application;
pub mod infrastructure;
pub mod ports;
