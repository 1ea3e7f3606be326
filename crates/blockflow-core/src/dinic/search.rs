use crate::graph::{Flow, FlowNetwork};

use super::levels::Levels;

#[derive(Debug, Clone, Copy)]
struct Frame<F> {
    vertex: usize,
    budget: F,
}

// One augmenting search over the current level graph, the recursive
// formulation restated on an explicit stack. Invariants preserved from the
// recursion: each vertex scans its heads from `current_arc[vertex]` upward
// and never returns to an earlier one within a phase; a head that fails the
// level test or admits no flow advances the pointer; a successful search
// leaves every pointer on the arc it pushed through. Budgets shrink on the
// way down, so the amount pushed during the unwind fits every arc on the
// path.
pub(super) fn blocking_search<F: Flow>(
    network: &mut FlowNetwork<F>,
    levels: &Levels,
    current_arc: &mut [usize],
    source: usize,
    sink: usize,
) -> F {
    debug_assert!(source != sink);
    let vertex_count = network.vertex_count();
    let mut stack = vec![Frame {
        vertex: source,
        budget: F::max_value(),
    }];

    while let Some(&Frame { vertex, budget }) = stack.last() {
        if vertex == sink {
            // Unwind, pushing the settled amount along the arc each frame is
            // parked on.
            stack.pop();
            while let Some(frame) = stack.pop() {
                network.push(frame.vertex, current_arc[frame.vertex], budget);
            }
            return budget;
        }

        let head = current_arc[vertex];
        if head >= vertex_count {
            // Every head scanned: this vertex is dead for the phase. Report
            // zero to the parent frame, which moves past the arc in turn.
            stack.pop();
            if let Some(parent) = stack.last() {
                current_arc[parent.vertex] += 1;
            }
            continue;
        }

        if levels.depth(head) != levels.depth(vertex) + 1 {
            current_arc[vertex] += 1;
            continue;
        }

        let amount = budget.min(network.residual(vertex, head));
        if amount == F::zero() {
            current_arc[vertex] += 1;
            continue;
        }

        stack.push(Frame {
            vertex: head,
            budget: amount,
        });
    }

    F::zero()
}
