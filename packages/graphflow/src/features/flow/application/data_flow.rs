//! DataFlowQuery - plain data-flow reachability descriptor

use tracing::debug;

use crate::errors::Result;
use crate::features::flow::domain::{scan_stream, ScanOutcome};
use crate::features::flow::infrastructure::{DfgTraverse, HamiltonFlow};
use crate::features::flow::ports::{FlowEnumerator, TraverseStrategy};
use crate::features::graph_store::application::NeighborProvider;
use crate::shared::models::{Column, Node, Row, Table};

/// Enumeration configuration for a data-flow query
pub struct DataFlowFeatures {
    pub flow: Box<dyn FlowEnumerator>,
    pub strategy: Box<dyn TraverseStrategy>,
}

impl Default for DataFlowFeatures {
    /// Reference configuration: node-unique enumeration along incoming
    /// data-flow edges
    fn default() -> Self {
        Self {
            flow: Box::new(HamiltonFlow),
            strategy: Box::new(DfgTraverse),
        }
    }
}

/// Data-flow reachability: which sinks does each source's value reach?
///
/// Runs the enumerator once per source node and scans every committed walk
/// for the first barrier or sink. A walk contributes at most one row (its
/// first sink); distinct walks from the same source may each contribute.
pub struct DataFlowQuery {
    alias: String,
    features: DataFlowFeatures,
}

impl DataFlowQuery {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            features: DataFlowFeatures::default(),
        }
    }

    pub fn with_features(mut self, features: DataFlowFeatures) -> Self {
        self.features = features;
        self
    }

    /// Evaluate the query, materializing one row per discovered flow
    ///
    /// Short-circuit: an empty sink column cannot produce rows, so the
    /// provider is never queried.
    ///
    /// # Errors
    ///
    /// A store failure aborts the whole evaluation; no partial table is
    /// returned.
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
            "running data-flow query"
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
        let streams = self
            .features
            .flow
            .apply(source, self.features.strategy.as_ref(), provider)?;

        for stream in streams {
            if let ScanOutcome::Hit { sink, path } = scan_stream(&stream, sinks, barriers) {
                result.add_row(Row {
                    source: source.clone(),
                    sink,
                    path,
                });
            }
        }
        Ok(())
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

    /// Store wrapper counting neighbor queries
    struct CountingStore {
        inner: MemoryGraphStore,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl GraphStore for CountingStore {
        async fn neighbors(
            &self,
            node: NodeId,
            kind: EdgeKind,
            direction: EdgeDirection,
        ) -> Result<Vec<(Node, Edge)>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.neighbors(node, kind, direction).await
        }
    }

    fn column(name: &str, ids: &[u64]) -> Column {
        Column::from_nodes(name, ids.iter().map(|&id| Node::new(id, NodeKind::Variable)))
    }

    #[test]
    fn test_empty_sink_short_circuits_without_store_queries() {
        let mut inner = MemoryGraphStore::new();
        inner.add_node(Node::new(1, NodeKind::Variable));
        let calls = Arc::new(AtomicUsize::new(0));
        let store = CountingStore {
            inner,
            calls: Arc::clone(&calls),
        };
        let provider = NeighborProvider::new(Arc::new(store)).unwrap();

        let table = DataFlowQuery::new("flows")
            .evaluate(
                &provider,
                &column("sources", &[1]),
                &Column::new("sinks"),
                &Column::new("barriers"),
            )
            .unwrap();

        assert!(table.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_store_error_aborts_evaluation() {
        // Dangling data-flow edge makes the neighbor query fail
        let mut store = MemoryGraphStore::new();
        store.add_node(Node::new(1, NodeKind::Variable));
        store.add_edge(Edge::new(10, 99, 1, EdgeKind::DataFlow));
        let provider = NeighborProvider::new(Arc::new(store)).unwrap();

        let err = DataFlowQuery::new("flows")
            .evaluate(
                &provider,
                &column("sources", &[1]),
                &column("sinks", &[2]),
                &Column::new("barriers"),
            )
            .unwrap_err();
        assert_eq!(err.kind, crate::errors::ErrorKind::Store);
    }
}
