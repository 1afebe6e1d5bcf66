//! Flow infrastructure - concrete enumerators and strategies

mod enumerators;
mod strategies;

pub use enumerators::{EulerFlow, HamiltonFlow};
pub use strategies::{CfgTraverse, DfgTraverse};
