//! Flow feature - path enumeration and reachability descriptors
//!
//! - ports/          - `FlowEnumerator` and `TraverseStrategy` traits
//! - domain/         - pure stream-scanning logic shared by the descriptors
//! - infrastructure/ - Euler/Hamilton enumerators, dfg/cfg strategies
//! - application/    - `DataFlowQuery` and `TaintFlowQuery` descriptors

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
