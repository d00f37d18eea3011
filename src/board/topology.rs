//! Fixed hexagram cell graph
//!
//! The star is laid out as 17 rows (see [`ROW_SIZES`]): a four-row point at
//! the top, a 13-wide band that narrows to 9 and widens back to 13, and a
//! four-row point at the bottom. Rows are wired with Left/Right links, and
//! consecutive rows with diagonal links:
//!
//! - rows growing by one cell: cell `j` of the short row touches `j` and
//!   `j + 1` of the long row
//! - rows 3 -> 4 and 13 -> 12, where a 4-cell point meets a 13-cell band:
//!   cell `j` touches `j + 4` and `j + 5`
//!
//! The graph never changes after construction, so a single instance is
//! shared by every [`Board`](super::Board).

use std::sync::OnceLock;

use super::{CellId, Direction, ROW_COUNT, ROW_SIZES, ROW_STARTS, CELL_COUNT};
use crate::eval::tables::precompute_scores;

/// Offset between a point row and the 13-wide band it touches
const POINT_OFFSET: usize = 4;

/// Rows whose next row is one cell wider
const GROWING_ROWS: [usize; 7] = [0, 1, 2, 8, 9, 10, 11];
/// Rows whose previous row is one cell wider
const SHRINKING_ROWS: [usize; 7] = [5, 6, 7, 8, 14, 15, 16];

/// A single board position and everything about it that never changes
#[derive(Debug, Clone)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Neighbour in each direction, indexed by [`Direction::index`]
    pub neighbours: [Option<CellId>; 6],
    /// `scores[scheme][side]`, filled by the score tables
    pub scores: [[i32; 2]; 2],
}

/// The complete cell graph
#[derive(Debug)]
pub struct Topology {
    cells: Vec<Cell>,
}

static TOPOLOGY: OnceLock<Topology> = OnceLock::new();

/// The shared board graph, built on first use
pub fn topology() -> &'static Topology {
    TOPOLOGY.get_or_init(Topology::build)
}

impl Topology {
    fn build() -> Self {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for (row, &size) in ROW_SIZES.iter().enumerate() {
            for col in 0..size {
                cells.push(Cell {
                    row,
                    col,
                    neighbours: [None; 6],
                    scores: [[0; 2]; 2],
                });
            }
        }

        let mut topology = Self { cells };
        topology.wire();
        precompute_scores(&mut topology.cells);
        topology
    }

    fn wire(&mut self) {
        for row in 0..ROW_COUNT {
            for col in 0..ROW_SIZES[row] - 1 {
                self.link(at(row, col), Direction::Right, at(row, col + 1));
            }
        }

        for &row in &GROWING_ROWS {
            for col in 0..ROW_SIZES[row] {
                self.link(at(row, col), Direction::DownLeft, at(row + 1, col));
                self.link(at(row, col), Direction::DownRight, at(row + 1, col + 1));
            }
        }

        for &row in &SHRINKING_ROWS {
            for col in 0..ROW_SIZES[row] {
                self.link(at(row, col), Direction::UpLeft, at(row - 1, col));
                self.link(at(row, col), Direction::UpRight, at(row - 1, col + 1));
            }
        }

        for col in 0..ROW_SIZES[3] {
            self.link(at(3, col), Direction::DownLeft, at(4, col + POINT_OFFSET));
            self.link(at(3, col), Direction::DownRight, at(4, col + POINT_OFFSET + 1));
        }

        for col in 0..ROW_SIZES[13] {
            self.link(at(13, col), Direction::UpLeft, at(12, col + POINT_OFFSET));
            self.link(at(13, col), Direction::UpRight, at(12, col + POINT_OFFSET + 1));
        }
    }

    /// Link `a -> b` in `dir` and `b -> a` in the opposite direction
    fn link(&mut self, a: CellId, dir: Direction, b: CellId) {
        self.cells[a.index()].neighbours[dir.index()] = Some(b);
        self.cells[b.index()].neighbours[dir.opposite().index()] = Some(a);
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    #[inline]
    pub fn neighbour(&self, id: CellId, dir: Direction) -> Option<CellId> {
        self.cells[id.index()].neighbours[dir.index()]
    }

    /// Existing neighbours with their direction, in [`Direction::ALL`] order
    pub fn neighbours(&self, id: CellId) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbour(id, dir).map(|n| (dir, n)))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[inline]
fn at(row: usize, col: usize) -> CellId {
    CellId::new(ROW_STARTS[row] + col)
}
