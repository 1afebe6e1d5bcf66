//! Flow application layer - the reachability descriptors
//!
//! Use cases driving the enumerators to populate query results:
//! `DataFlowQuery` for plain data-flow reachability, `TaintFlowQuery` for
//! the two-phase data-flow/control-flow composition.

mod data_flow;
mod taint_flow;

pub use data_flow::{DataFlowFeatures, DataFlowQuery};
pub use taint_flow::{TaintFlowFeatures, TaintFlowQuery};
