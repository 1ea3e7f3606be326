use std::collections::VecDeque;

use crate::graph::{Flow, FlowNetwork};

pub(super) const UNREACHED: usize = usize::MAX;

// Breadth-first distance labels from the source, recomputed at the start of
// every phase. An arc belongs to the level graph exactly when its head is one
// level deeper than its tail.
#[derive(Debug)]
pub(super) struct Levels {
    depth: Vec<usize>,
    queue: VecDeque<usize>,
}

impl Levels {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            depth: vec![UNREACHED; vertex_count],
            queue: VecDeque::with_capacity(vertex_count),
        }
    }

    pub(super) fn rebuild<F: Flow>(&mut self, network: &FlowNetwork<F>, source: usize) {
        self.depth.fill(UNREACHED);
        self.queue.clear();
        self.depth[source] = 0;
        self.queue.push_back(source);
        while let Some(vertex) = self.queue.pop_front() {
            let next_depth = self.depth[vertex] + 1;
            for head in network.neighbors(vertex) {
                if self.depth[head] == UNREACHED {
                    self.depth[head] = next_depth;
                    self.queue.push_back(head);
                }
            }
        }
    }

    pub(super) fn reached(&self, vertex: usize) -> bool {
        self.depth[vertex] != UNREACHED
    }

    pub(super) fn depth(&self, vertex: usize) -> usize {
        self.depth[vertex]
    }
}
