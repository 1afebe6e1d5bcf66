//! Flow enumerators - depth-first path enumeration with a no-repeat rule
//!
//! Both variants share one recursive DFS; they differ only in which
//! identifier the no-repeat rule tracks. `EulerFlow` forbids reusing an
//! edge on the current stack path, `HamiltonFlow` forbids revisiting a
//! node. Either way the walk count stays finite on cyclic graphs and the
//! traversal always terminates.
//!
//! All traversal state lives in a call-local `Dfs` value owned by one
//! `apply` call. On an error the whole value is dropped mid-unwind, so a
//! failed enumeration leaves nothing behind for a later call to trip over.

use rustc_hash::FxHashSet;

use crate::errors::Result;
use crate::features::flow::ports::{FlowEnumerator, TraverseStrategy};
use crate::features::graph_store::application::NeighborProvider;
use crate::shared::models::{FlowStep, FlowStream, Node, NodeId};

/// Which identifier the no-repeat rule tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Uniqueness {
    /// A stream may repeat nodes but never reuses an edge
    Edge,
    /// No node is visited twice, the origin included
    Node,
}

/// Edge-unique enumerator ("Euler" mode)
///
/// At each node, every (neighbor, edge) pair is considered. A pair whose
/// edge is already on the current stack path commits the walk so far as a
/// cut and moves on to the remaining siblings; a fresh edge is descended
/// through and unwound on return. Walks with no expansion left are
/// committed as maximal.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerFlow;

impl FlowEnumerator for EulerFlow {
    fn apply(
        &self,
        origin: &Node,
        strategy: &dyn TraverseStrategy,
        provider: &NeighborProvider,
    ) -> Result<Vec<FlowStream>> {
        Dfs::new(origin, Uniqueness::Edge).run(origin.id, strategy, provider)
    }
}

/// Node-unique enumerator ("Hamilton" mode)
///
/// Same control structure as `EulerFlow`, but the no-repeat test is on node
/// identifiers with the origin pre-seeded. This is the default for general
/// data-flow queries: edge multiplicity between the same node pair carries
/// no extra information for "does this value reach this use", node identity
/// does.
#[derive(Debug, Clone, Copy, Default)]
pub struct HamiltonFlow;

impl FlowEnumerator for HamiltonFlow {
    fn apply(
        &self,
        origin: &Node,
        strategy: &dyn TraverseStrategy,
        provider: &NeighborProvider,
    ) -> Result<Vec<FlowStream>> {
        Dfs::new(origin, Uniqueness::Node).run(origin.id, strategy, provider)
    }
}

/// Call-local traversal state
struct Dfs {
    uniqueness: Uniqueness,
    visited: FxHashSet<u64>,
    stack: Vec<FlowStep>,
    streams: Vec<FlowStream>,
}

impl Dfs {
    fn new(origin: &Node, uniqueness: Uniqueness) -> Self {
        let mut visited = FxHashSet::default();
        if uniqueness == Uniqueness::Node {
            visited.insert(origin.id);
        }
        Self {
            uniqueness,
            visited,
            stack: vec![FlowStep::origin(origin.clone())],
            streams: Vec::new(),
        }
    }

    fn run(
        mut self,
        origin: NodeId,
        strategy: &dyn TraverseStrategy,
        provider: &NeighborProvider,
    ) -> Result<Vec<FlowStream>> {
        self.dfs(origin, strategy, provider)?;
        // Backtracking must have unwound to the origin frame
        debug_assert_eq!(self.stack.len(), 1);
        Ok(self.streams)
    }

    fn dfs(
        &mut self,
        current: NodeId,
        strategy: &dyn TraverseStrategy,
        provider: &NeighborProvider,
    ) -> Result<()> {
        let neighbors = strategy.neighbors(provider, current)?;
        if neighbors.is_empty() {
            self.commit();
            return Ok(());
        }

        for (node, edge) in neighbors {
            let key = match self.uniqueness {
                Uniqueness::Edge => edge.id,
                Uniqueness::Node => node.id,
            };
            if self.visited.contains(&key) {
                // Cycle cut: commit the walk up to here, keep trying the
                // remaining siblings at this level
                self.commit();
                continue;
            }

            self.visited.insert(key);
            let next = node.id;
            self.stack.push(FlowStep::new(node, edge));

            self.dfs(next, strategy, provider)?;

            self.stack.pop();
            self.visited.remove(&key);
        }
        Ok(())
    }

    fn commit(&mut self) {
        self.streams.push(FlowStream::new(self.stack.clone()));
    }
}
