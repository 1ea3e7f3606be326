pub mod augmenting;
pub mod dinic;
pub mod graph;
pub mod grid;

use std::fmt;

pub use dinic::{MaxFlowOutcome, PhaseStats, Termination};
pub use graph::{Flow, FlowNetwork, IdMapping};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowError {
    /// Fewer vertices than a distinct source and sink need.
    InvalidSize { vertices: usize },
    /// Negative capacity handed to arc insertion.
    InvalidCapacity { tail: usize, head: usize },
    /// Vertex index at or beyond the vertex count.
    OutOfRange { vertex: usize, bound: usize },
    /// Identical source and sink handed to an engine.
    SourceIsSink { vertex: usize },
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::InvalidSize { vertices } => {
                write!(f, "network needs at least 2 vertices, got {vertices}")
            }
            FlowError::InvalidCapacity { tail, head } => {
                write!(f, "negative capacity on arc {tail} -> {head}")
            }
            FlowError::OutOfRange { vertex, bound } => {
                write!(f, "vertex {vertex} outside range 0..{bound}")
            }
            FlowError::SourceIsSink { vertex } => {
                write!(f, "source and sink are both vertex {vertex}")
            }
        }
    }
}

impl std::error::Error for FlowError {}

/// Ceilings on the blocking-flow phase loop, both checked between phases
/// only. Defaults leave the engine running to exhaustion.
#[derive(Debug, Clone, Default)]
pub struct MaxFlowOptions {
    pub phase_limit: Option<usize>,
    pub time_limit_ms: Option<u64>,
}

/// Runs the blocking-flow engine with default options and returns the flow
/// value alone.
pub fn max_flow<F: Flow>(
    network: &mut FlowNetwork<F>,
    source: usize,
    sink: usize,
) -> Result<F, FlowError> {
    let outcome = dinic::max_flow(network, source, sink, &MaxFlowOptions::default())?;
    Ok(outcome.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_with_arcs(n: usize, arcs: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
        let mut network = FlowNetwork::new(n).unwrap();
        for &(tail, head, capacity) in arcs {
            network.add_arc(tail, head, capacity).unwrap();
        }
        network
    }

    #[test]
    fn saturates_a_single_arc() {
        let mut network = network_with_arcs(2, &[(0, 1, 5)]);
        assert_eq!(max_flow(&mut network, 0, 1).unwrap(), 5);
    }

    #[test]
    fn splits_and_rejoins_flow() {
        let mut network = network_with_arcs(
            4,
            &[(0, 1, 1000), (0, 2, 1000), (1, 2, 1), (1, 3, 1000), (2, 3, 1000)],
        );
        assert_eq!(max_flow(&mut network, 0, 3).unwrap(), 2000);
    }

    #[test]
    fn rejects_out_of_range_terminals() {
        let mut network = network_with_arcs(2, &[(0, 1, 1)]);
        let err = max_flow(&mut network, 0, 5).unwrap_err();
        assert!(matches!(err, FlowError::OutOfRange { vertex: 5, bound: 2 }));
    }

    #[test]
    fn rejects_identical_terminals() {
        let mut network = network_with_arcs(2, &[(0, 1, 1)]);
        let err = max_flow(&mut network, 1, 1).unwrap_err();
        assert!(matches!(err, FlowError::SourceIsSink { vertex: 1 }));
    }

    #[test]
    fn rejects_negative_capacity() {
        let mut network = FlowNetwork::new(2).unwrap();
        let err = network.add_arc(0, 1, -3_i64).unwrap_err();
        assert!(matches!(err, FlowError::InvalidCapacity { tail: 0, head: 1 }));
    }
}
