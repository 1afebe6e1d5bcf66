//! Graph store application layer

mod neighbor_provider;

pub use neighbor_provider::NeighborProvider;
