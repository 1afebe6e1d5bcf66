//! Flow domain - stream scanning
//!
//! The one piece of pure logic both descriptors share: walk a committed
//! stream in step order against a sink column and a barrier column and
//! decide what, if anything, the stream contributes to the result.

use crate::shared::models::{Column, FlowPath, FlowStream, Node};

/// Outcome of scanning one stream
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// A sink was reached before any barrier; `path` runs from the origin
    /// up to and including the sink
    Hit { sink: Node, path: FlowPath },
    /// A barrier truncated the scan before any sink
    Blocked,
    /// The stream ended without meeting a sink or a barrier
    Exhausted,
}

/// Scan a stream in step order
///
/// Barrier precedence: the first barrier step truncates the scan, so a sink
/// past it on the same stream is never considered. The first sink before
/// any barrier is decisive; a stream contributes at most one hit. The
/// origin step participates in the scan like any other step.
pub fn scan_stream(stream: &FlowStream, sinks: &Column, barriers: &Column) -> ScanOutcome {
    let mut path = FlowPath::new();
    for step in stream {
        path.push(step.node.clone());
        if barriers.contains(&step.node) {
            return ScanOutcome::Blocked;
        }
        if sinks.contains(&step.node) {
            return ScanOutcome::Hit {
                sink: step.node.clone(),
                path,
            };
        }
    }
    ScanOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Edge, EdgeKind, FlowStep, NodeKind};

    fn chain_stream(ids: &[u64]) -> FlowStream {
        let mut steps = vec![FlowStep::origin(Node::new(ids[0], NodeKind::Variable))];
        for window in ids.windows(2) {
            steps.push(FlowStep::new(
                Node::new(window[1], NodeKind::Variable),
                Edge::new(window[0] * 100 + window[1], window[0], window[1], EdgeKind::DataFlow),
            ));
        }
        FlowStream::new(steps)
    }

    fn column(name: &str, ids: &[u64]) -> Column {
        Column::from_nodes(name, ids.iter().map(|&id| Node::new(id, NodeKind::Variable)))
    }

    #[test]
    fn test_sink_before_barrier_hits() {
        let stream = chain_stream(&[1, 2, 3]);
        let outcome = scan_stream(&stream, &column("sinks", &[2]), &column("barriers", &[3]));
        match outcome {
            ScanOutcome::Hit { sink, path } => {
                assert_eq!(sink.id, 2);
                let ids: Vec<u64> = path.nodes().iter().map(|n| n.id).collect();
                assert_eq!(ids, vec![1, 2]);
            }
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn test_barrier_suppresses_later_sink() {
        let stream = chain_stream(&[1, 2, 3]);
        let outcome = scan_stream(&stream, &column("sinks", &[3]), &column("barriers", &[2]));
        assert_eq!(outcome, ScanOutcome::Blocked);
    }

    #[test]
    fn test_first_sink_is_decisive() {
        let stream = chain_stream(&[1, 2, 3]);
        let outcome = scan_stream(&stream, &column("sinks", &[2, 3]), &Column::new("barriers"));
        match outcome {
            ScanOutcome::Hit { sink, .. } => assert_eq!(sink.id, 2),
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn test_origin_step_participates() {
        let stream = chain_stream(&[1, 2]);
        let outcome = scan_stream(&stream, &column("sinks", &[1]), &Column::new("barriers"));
        match outcome {
            ScanOutcome::Hit { sink, path } => {
                assert_eq!(sink.id, 1);
                assert_eq!(path.len(), 1);
            }
            other => panic!("expected hit, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match_exhausts() {
        let stream = chain_stream(&[1, 2, 3]);
        let outcome = scan_stream(&stream, &column("sinks", &[9]), &column("barriers", &[8]));
        assert_eq!(outcome, ScanOutcome::Exhausted);
    }
}
