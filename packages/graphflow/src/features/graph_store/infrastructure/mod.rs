//! Graph store backends

mod memory_store;

pub use memory_store::MemoryGraphStore;
