use std::time::Instant;

use log::debug;

use crate::graph::{Flow, FlowNetwork};
use crate::{FlowError, MaxFlowOptions};

mod levels;
mod search;

use levels::Levels;
use search::blocking_search;

#[derive(Debug, Default, Clone)]
pub struct PhaseStats {
    pub phases: usize,
    pub augmentations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No layering reaches the sink any more; the flow is maximum.
    Exhausted,
    PhaseLimit,
    TimeLimit,
}

#[derive(Debug, Clone)]
pub struct MaxFlowOutcome<F> {
    pub value: F,
    pub stats: PhaseStats,
    pub termination: Termination,
}

pub(crate) fn validate_terminals<F: Flow>(
    network: &FlowNetwork<F>,
    source: usize,
    sink: usize,
) -> Result<(), FlowError> {
    let bound = network.vertex_count();
    if source >= bound {
        return Err(FlowError::OutOfRange {
            vertex: source,
            bound,
        });
    }
    if sink >= bound {
        return Err(FlowError::OutOfRange {
            vertex: sink,
            bound,
        });
    }
    if source == sink {
        return Err(FlowError::SourceIsSink { vertex: source });
    }
    Ok(())
}

/// Maximum flow by layered blocking-flow search. Terminal indices are checked
/// up front; after that the phase loop runs unchecked over the network. The
/// network is left holding the final flow assignment.
pub fn max_flow<F: Flow>(
    network: &mut FlowNetwork<F>,
    source: usize,
    sink: usize,
    opts: &MaxFlowOptions,
) -> Result<MaxFlowOutcome<F>, FlowError> {
    validate_terminals(network, source, sink)?;

    let started = Instant::now();
    let vertex_count = network.vertex_count();
    let mut levels = Levels::new(vertex_count);
    let mut current_arc = vec![0_usize; vertex_count];
    let mut stats = PhaseStats::default();
    let mut total = F::zero();

    let termination = loop {
        if let Some(limit) = opts.phase_limit {
            if stats.phases >= limit {
                break Termination::PhaseLimit;
            }
        }
        if let Some(limit_ms) = opts.time_limit_ms {
            if started.elapsed().as_millis() as u64 >= limit_ms {
                break Termination::TimeLimit;
            }
        }

        levels.rebuild(network, source);
        if !levels.reached(sink) {
            break Termination::Exhausted;
        }
        stats.phases += 1;
        current_arc.fill(0);

        let mut phase_flow = F::zero();
        loop {
            let pushed = blocking_search(network, &levels, &mut current_arc, source, sink);
            if pushed == F::zero() {
                break;
            }
            stats.augmentations += 1;
            phase_flow = phase_flow
                .checked_add(&pushed)
                .expect("flow total overflows the numeric width");
        }
        total = total
            .checked_add(&phase_flow)
            .expect("flow total overflows the numeric width");

        debug!(
            "[dinic] phase={} phase_flow={:?} total={:?} augmentations={}",
            stats.phases, phase_flow, total, stats.augmentations
        );
    };

    Ok(MaxFlowOutcome {
        value: total,
        stats,
        termination,
    })
}
