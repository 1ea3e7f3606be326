use std::collections::VecDeque;

use log::trace;

use crate::dinic::validate_terminals;
use crate::graph::{Flow, FlowNetwork};
use crate::FlowError;

const NO_PARENT: usize = usize::MAX;

/// Maximum flow by shortest augmenting paths: breadth-first parent search,
/// bottleneck walk-back, repeat until the sink is cut off.
pub fn edmonds_karp<F: Flow>(
    network: &mut FlowNetwork<F>,
    source: usize,
    sink: usize,
) -> Result<F, FlowError> {
    validate_terminals(network, source, sink)?;
    let mut parent = vec![NO_PARENT; network.vertex_count()];
    let mut total = F::zero();
    while breadth_first_path(network, source, sink, &mut parent) {
        let pushed = augment_along(network, source, sink, &parent);
        total = total
            .checked_add(&pushed)
            .expect("flow total overflows the numeric width");
        trace!("[edmonds_karp] pushed={pushed:?} total={total:?}");
    }
    Ok(total)
}

/// Maximum flow by plain depth-first augmenting paths over an explicit stack.
/// Same contract as [`edmonds_karp`]; paths come in no particular length
/// order.
pub fn ford_fulkerson<F: Flow>(
    network: &mut FlowNetwork<F>,
    source: usize,
    sink: usize,
) -> Result<F, FlowError> {
    validate_terminals(network, source, sink)?;
    let mut parent = vec![NO_PARENT; network.vertex_count()];
    let mut total = F::zero();
    while depth_first_path(network, source, sink, &mut parent) {
        let pushed = augment_along(network, source, sink, &parent);
        total = total
            .checked_add(&pushed)
            .expect("flow total overflows the numeric width");
        trace!("[ford_fulkerson] pushed={pushed:?} total={total:?}");
    }
    Ok(total)
}

fn breadth_first_path<F: Flow>(
    network: &FlowNetwork<F>,
    source: usize,
    sink: usize,
    parent: &mut [usize],
) -> bool {
    parent.fill(NO_PARENT);
    parent[source] = source;
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(vertex) = queue.pop_front() {
        for head in network.neighbors(vertex) {
            if parent[head] != NO_PARENT {
                continue;
            }
            parent[head] = vertex;
            if head == sink {
                return true;
            }
            queue.push_back(head);
        }
    }
    false
}

fn depth_first_path<F: Flow>(
    network: &FlowNetwork<F>,
    source: usize,
    sink: usize,
    parent: &mut [usize],
) -> bool {
    parent.fill(NO_PARENT);
    parent[source] = source;
    let mut stack = vec![source];
    while let Some(vertex) = stack.pop() {
        for head in network.neighbors(vertex) {
            if parent[head] != NO_PARENT {
                continue;
            }
            parent[head] = vertex;
            if head == sink {
                return true;
            }
            stack.push(head);
        }
    }
    false
}

// Walks sink-to-source twice: once for the bottleneck, once to push it.
fn augment_along<F: Flow>(
    network: &mut FlowNetwork<F>,
    source: usize,
    sink: usize,
    parent: &[usize],
) -> F {
    let mut bottleneck = F::max_value();
    let mut vertex = sink;
    while vertex != source {
        let tail = parent[vertex];
        bottleneck = bottleneck.min(network.residual(tail, vertex));
        vertex = tail;
    }
    let mut vertex = sink;
    while vertex != source {
        let tail = parent[vertex];
        network.push(tail, vertex, bottleneck);
        vertex = tail;
    }
    bottleneck
}
