use std::collections::VecDeque;
use std::fmt;

use num_traits::{CheckedAdd, NumAssign, PrimInt, Signed};

use crate::FlowError;

/// Numeric carrier for capacities and flow values. Signed because the flow on
/// a reverse residual arc is the negation of its forward twin.
pub trait Flow: PrimInt + Signed + NumAssign + CheckedAdd + fmt::Debug {}

impl<T: PrimInt + Signed + NumAssign + CheckedAdd + fmt::Debug> Flow for T {}

#[derive(Debug, Clone, Copy)]
struct ArcCell<F> {
    capacity: F,
    flow: F,
}

impl<F: Flow> ArcCell<F> {
    fn residual(&self) -> F {
        self.capacity - self.flow
    }
}

/// Dense residual network over a fixed vertex set. Every ordered vertex pair
/// owns one cell, so the reverse counterpart of each arc exists from the start
/// with capacity zero.
#[derive(Debug, Clone)]
pub struct FlowNetwork<F> {
    vertex_count: usize,
    cells: Vec<ArcCell<F>>,
}

impl<F: Flow> FlowNetwork<F> {
    pub fn new(vertex_count: usize) -> Result<Self, FlowError> {
        if vertex_count < 2 {
            return Err(FlowError::InvalidSize {
                vertices: vertex_count,
            });
        }
        Ok(Self {
            vertex_count,
            cells: vec![
                ArcCell {
                    capacity: F::zero(),
                    flow: F::zero(),
                };
                vertex_count * vertex_count
            ],
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn index(&self, tail: usize, head: usize) -> usize {
        tail * self.vertex_count + head
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), FlowError> {
        if vertex >= self.vertex_count {
            return Err(FlowError::OutOfRange {
                vertex,
                bound: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Inserts `tail -> head` with the given capacity. Re-adding the same
    /// ordered pair overwrites the earlier cell; parallel arcs must be
    /// aggregated by the caller before insertion.
    pub fn add_arc(&mut self, tail: usize, head: usize, capacity: F) -> Result<(), FlowError> {
        self.check_vertex(tail)?;
        self.check_vertex(head)?;
        if capacity < F::zero() {
            return Err(FlowError::InvalidCapacity { tail, head });
        }
        let idx = self.index(tail, head);
        self.cells[idx] = ArcCell {
            capacity,
            flow: F::zero(),
        };
        Ok(())
    }

    pub fn capacity(&self, tail: usize, head: usize) -> F {
        self.cells[self.index(tail, head)].capacity
    }

    pub fn flow(&self, tail: usize, head: usize) -> F {
        self.cells[self.index(tail, head)].flow
    }

    pub fn residual(&self, tail: usize, head: usize) -> F {
        self.cells[self.index(tail, head)].residual()
    }

    /// Heads reachable from `tail` through strictly positive residual
    /// capacity, in ascending vertex order.
    pub fn neighbors(&self, tail: usize) -> impl Iterator<Item = usize> + '_ {
        let row = tail * self.vertex_count;
        self.cells[row..row + self.vertex_count]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.residual() > F::zero())
            .map(|(head, _)| head)
    }

    /// Moves `amount` units along `tail -> head`, uncovering the same amount
    /// of residual capacity on the reverse arc. `amount` must not exceed the
    /// current forward residual.
    pub fn push(&mut self, tail: usize, head: usize, amount: F) {
        assert!(amount >= F::zero(), "negative push amount");
        let forward = self.index(tail, head);
        assert!(
            amount <= self.cells[forward].residual(),
            "push exceeds residual capacity"
        );
        self.cells[forward].flow += amount;
        let backward = self.index(head, tail);
        self.cells[backward].flow -= amount;
    }

    /// Marks every vertex reachable from `from` in the residual graph. Once a
    /// maximum flow is in place the marked set is the source side of a
    /// minimum cut.
    pub fn residual_reachable(&self, from: usize) -> Vec<bool> {
        let mut reachable = vec![false; self.vertex_count];
        reachable[from] = true;
        let mut queue = VecDeque::new();
        queue.push_back(from);
        while let Some(vertex) = queue.pop_front() {
            for head in self.neighbors(vertex) {
                if !reachable[head] {
                    reachable[head] = true;
                    queue.push_back(head);
                }
            }
        }
        reachable
    }

    /// Total capacity of forward arcs leaving the marked side.
    pub fn cut_capacity(&self, side: &[bool]) -> F {
        assert_eq!(side.len(), self.vertex_count, "side mask length mismatch");
        let mut total = F::zero();
        for tail in 0..self.vertex_count {
            if !side[tail] {
                continue;
            }
            for head in 0..self.vertex_count {
                if !side[head] {
                    total += self.capacity(tail, head);
                }
            }
        }
        total
    }
}
