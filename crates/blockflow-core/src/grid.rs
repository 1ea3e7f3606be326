use std::fmt;

use crate::graph::FlowNetwork;
use crate::{dinic, FlowError, MaxFlowOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    LengthMismatch {
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} holds {found} cells, expected {expected}")
            }
            GridError::LengthMismatch { expected, found } => {
                write!(f, "valence vector holds {found} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A grid of per-cell bond requirements, 0 marking an empty cell. Saturation
/// asks whether every requirement can be met exactly by unit bonds between
/// orthogonally adjacent cells; the answer reduces to a maximum flow across
/// the checkerboard bipartition of the grid.
#[derive(Debug, Clone)]
pub struct ValenceGrid {
    rows: usize,
    cols: usize,
    valence: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Saturation {
    pub flow: i64,
    pub source_side: i64,
    pub sink_side: i64,
}

impl Saturation {
    /// Exact saturation: some flow exists and it meets the full requirement
    /// of both checkerboard sides.
    pub fn is_exact(&self) -> bool {
        self.flow != 0 && self.flow == self.source_side && self.flow == self.sink_side
    }
}

impl ValenceGrid {
    pub fn new(rows: usize, cols: usize, valence: Vec<u8>) -> Result<Self, GridError> {
        let expected = rows * cols;
        if valence.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: valence.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            valence,
        })
    }

    /// Parses letter labels row by row: `H`, `O`, `N`, `C` carry valences 1
    /// through 4, anything else is an empty cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut valence = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: cols,
                    found,
                });
            }
            valence.extend(row.chars().map(cell_valence));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            valence,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    // Cell vertices start at 1; 0 is the start terminal, rows*cols + 1 the
    // finish terminal.
    fn cell_vertex(&self, row: usize, col: usize) -> usize {
        row * self.cols + col + 1
    }

    /// Builds the flow reduction and runs the blocking-flow engine once.
    /// Even-parity cells draw their requirement from the start terminal and
    /// offer unit arcs to every in-bounds neighbor; odd-parity cells drain
    /// theirs to the finish terminal.
    pub fn saturation(&self) -> Result<Saturation, FlowError> {
        let cell_count = self.rows * self.cols;
        let start = 0;
        let finish = cell_count + 1;
        let mut network = FlowNetwork::new(cell_count + 2)?;

        let mut source_side = 0_i64;
        let mut sink_side = 0_i64;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let requirement = i64::from(self.valence[row * self.cols + col]);
                if requirement == 0 {
                    continue;
                }
                let cell = self.cell_vertex(row, col);
                if (row + col) % 2 == 0 {
                    source_side += requirement;
                    network.add_arc(start, cell, requirement)?;
                    for (adj_row, adj_col) in self.neighbors4(row, col) {
                        network.add_arc(cell, self.cell_vertex(adj_row, adj_col), 1)?;
                    }
                } else {
                    sink_side += requirement;
                    network.add_arc(cell, finish, requirement)?;
                }
            }
        }

        let outcome = dinic::max_flow(&mut network, start, finish, &MaxFlowOptions::default())?;
        Ok(Saturation {
            flow: outcome.value,
            source_side,
            sink_side,
        })
    }

    pub fn is_saturable(&self) -> Result<bool, FlowError> {
        Ok(self.saturation()?.is_exact())
    }

    fn neighbors4(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut adjacent = Vec::with_capacity(4);
        if row > 0 {
            adjacent.push((row - 1, col));
        }
        if row + 1 < self.rows {
            adjacent.push((row + 1, col));
        }
        if col > 0 {
            adjacent.push((row, col - 1));
        }
        if col + 1 < self.cols {
            adjacent.push((row, col + 1));
        }
        adjacent
    }
}

fn cell_valence(label: char) -> u8 {
    match label {
        'H' => 1,
        'O' => 2,
        'N' => 3,
        'C' => 4,
        _ => 0,
    }
}
