//! TaintFlowQuery - two-phase taint reachability descriptor
//!
//! Control-flow reachability alone is too permissive: in most graphs every
//! statement is control-flow-reachable from program entry. The descriptor
//! therefore narrows the candidate sinks and barriers to those actually
//! data-flow-reachable from the source before asking the control-flow
//! question, turning "is there some execution order that both carries the
//! value and executes it" into two bounded passes instead of one search
//! over a product graph.

use tracing::{debug, trace};

use crate::errors::Result;
use crate::features::flow::domain::{scan_stream, ScanOutcome};
use crate::features::flow::infrastructure::{CfgTraverse, DfgTraverse, HamiltonFlow};
use crate::features::flow::ports::{FlowEnumerator, TraverseStrategy};
use crate::features::graph_store::application::NeighborProvider;
use crate::shared::models::{Column, Node, Row, Table};

/// Enumeration configuration for both phases of a taint query
pub struct TaintFlowFeatures {
    pub data_flow: Box<dyn FlowEnumerator>,
    pub data_strategy: Box<dyn TraverseStrategy>,
    pub control_flow: Box<dyn FlowEnumerator>,
    pub control_strategy: Box<dyn TraverseStrategy>,
}

impl Default for TaintFlowFeatures {
    /// Reference configuration: node-unique enumeration for both phases,
    /// data-flow edges for narrowing, control-flow edges for the decision
    fn default() -> Self {
        Self {
            data_flow: Box::new(HamiltonFlow),
            data_strategy: Box::new(DfgTraverse),
            control_flow: Box::new(HamiltonFlow),
            control_strategy: Box::new(CfgTraverse),
        }
    }
}

/// Two-phase taint reachability
///
/// Per source node: phase 1 enumerates data-flow walks and collects which
/// sink/barrier candidates they touch (membership only, paths discarded);
/// phase 2 re-enumerates along control flow against the narrowed sets with
/// the same truncate-on-barrier, commit-on-sink scan as the data-flow
/// descriptor. An empty narrowed sink set means no taint is possible from
/// that source and phase 2 never runs.
pub struct TaintFlowQuery {
    alias: String,
    features: TaintFlowFeatures,
}

impl TaintFlowQuery {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            features: TaintFlowFeatures::default(),
        }
    }

    pub fn with_features(mut self, features: TaintFlowFeatures) -> Self {
        self.features = features;
        self
    }

    /// Evaluate the query, materializing one row per tainted flow
    ///
    /// # Errors
    ///
    /// A store failure in either phase aborts the whole evaluation.
    pub fn evaluate(
        &self,
        provider: &NeighborProvider,
        sources: &Column,
        sinks: &Column,
        barriers: &Column,
    ) -> Result<Table> {
        let mut result = Table::new(&self.alias);
        if sinks.is_empty() {
            return Ok(result);
        }

        debug!(
            sources = sources.len(),
            sinks = sinks.len(),
            barriers = barriers.len(),
            "running taint-flow query"
        );

        for source in sources {
            self.evaluate_source(provider, source, sinks, barriers, &mut result)?;
        }
        Ok(result)
    }

    fn evaluate_source(
        &self,
        provider: &NeighborProvider,
        source: &Node,
        sinks: &Column,
        barriers: &Column,
        result: &mut Table,
    ) -> Result<()> {
        let (narrowed_sinks, narrowed_barriers) =
            self.narrow(provider, source, sinks, barriers)?;

        if narrowed_sinks.is_empty() {
            trace!(source = source.id, "no data-flow-reachable sink, skipping control-flow phase");
            return Ok(());
        }

        let streams = self.features.control_flow.apply(
            source,
            self.features.control_strategy.as_ref(),
            provider,
        )?;
        for stream in streams {
            if let ScanOutcome::Hit { sink, path } =
                scan_stream(&stream, &narrowed_sinks, &narrowed_barriers)
            {
                result.add_row(Row {
                    source: source.clone(),
                    sink,
                    path,
                });
            }
        }
        Ok(())
    }

    /// Phase 1: one data-flow enumeration restricting both candidate sets
    /// to the nodes it actually touches
    fn narrow(
        &self,
        provider: &NeighborProvider,
        source: &Node,
        sinks: &Column,
        barriers: &Column,
    ) -> Result<(Column, Column)> {
        let mut narrowed_sinks = Column::new(sinks.name());
        let mut narrowed_barriers = Column::new(barriers.name());

        let streams =
            self.features
                .data_flow
                .apply(source, self.features.data_strategy.as_ref(), provider)?;
        for stream in streams {
            for step in &stream {
                if sinks.contains(&step.node) {
                    narrowed_sinks.add(step.node.clone());
                }
                if barriers.contains(&step.node) {
                    narrowed_barriers.add(step.node.clone());
                }
            }
        }
        Ok((narrowed_sinks, narrowed_barriers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::graph_store::infrastructure::MemoryGraphStore;
    use crate::features::graph_store::ports::GraphStore;
    use crate::shared::models::{Edge, EdgeDirection, EdgeKind, NodeId, NodeKind};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Store wrapper counting queries per edge kind
    struct KindCountingStore {
        inner: MemoryGraphStore,
        dfg_calls: Arc<AtomicUsize>,
        cfg_calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl GraphStore for KindCountingStore {
        async fn neighbors(
            &self,
            node: NodeId,
            kind: EdgeKind,
            direction: EdgeDirection,
        ) -> Result<Vec<(Node, Edge)>> {
            match kind {
                EdgeKind::DataFlow => self.dfg_calls.fetch_add(1, Ordering::SeqCst),
                EdgeKind::ControlFlow => self.cfg_calls.fetch_add(1, Ordering::SeqCst),
            };
            self.inner.neighbors(node, kind, direction).await
        }
    }

    fn column(name: &str, ids: &[u64]) -> Column {
        Column::from_nodes(name, ids.iter().map(|&id| Node::new(id, NodeKind::Statement)))
    }

    #[test]
    fn test_unreachable_sink_skips_control_flow_phase() {
        // Data flow 1 -> 2, but the sink is elsewhere; control-flow edges
        // exist and must never be queried
        let mut inner = MemoryGraphStore::new();
        for id in 1..=4 {
            inner.add_node(Node::new(id, NodeKind::Statement));
        }
        inner.add_edge(Edge::new(10, 2, 1, EdgeKind::DataFlow));
        inner.add_edge(Edge::new(20, 1, 4, EdgeKind::ControlFlow));

        let dfg_calls = Arc::new(AtomicUsize::new(0));
        let cfg_calls = Arc::new(AtomicUsize::new(0));
        let store = KindCountingStore {
            inner,
            dfg_calls: Arc::clone(&dfg_calls),
            cfg_calls: Arc::clone(&cfg_calls),
        };
        let provider = NeighborProvider::new(Arc::new(store)).unwrap();

        let table = TaintFlowQuery::new("taint")
            .evaluate(
                &provider,
                &column("sources", &[1]),
                &column("sinks", &[3]),
                &Column::new("barriers"),
            )
            .unwrap();

        assert!(table.is_empty());
        assert!(dfg_calls.load(Ordering::SeqCst) > 0);
        assert_eq!(cfg_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_sink_column_short_circuits() {
        let mut inner = MemoryGraphStore::new();
        inner.add_node(Node::new(1, NodeKind::Statement));
        let dfg_calls = Arc::new(AtomicUsize::new(0));
        let cfg_calls = Arc::new(AtomicUsize::new(0));
        let store = KindCountingStore {
            inner,
            dfg_calls: Arc::clone(&dfg_calls),
            cfg_calls: Arc::clone(&cfg_calls),
        };
        let provider = NeighborProvider::new(Arc::new(store)).unwrap();

        let table = TaintFlowQuery::new("taint")
            .evaluate(
                &provider,
                &column("sources", &[1]),
                &Column::new("sinks"),
                &Column::new("barriers"),
            )
            .unwrap();

        assert!(table.is_empty());
        assert_eq!(dfg_calls.load(Ordering::SeqCst), 0);
        assert_eq!(cfg_calls.load(Ordering::SeqCst), 0);
    }
}
