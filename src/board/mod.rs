//! Board representation for Chinese Checkers

pub mod board;
pub mod topology;


// Re-exports
pub use board::{AppliedPath, Board, Path, Piece, PieceId};
pub use topology::{topology, Cell, Topology};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Cells per row, top to bottom
pub const ROW_SIZES: [usize; ROW_COUNT] = [1, 2, 3, 4, 13, 12, 11, 10, 9, 10, 11, 12, 13, 4, 3, 2, 1];
pub const ROW_COUNT: usize = 17;
pub const CELL_COUNT: usize = 121;

/// Cells in each corner triangle
pub const TRIANGLE_SIZE: usize = 10;
/// Pieces each side starts with
pub const PIECES_PER_SIDE: usize = 10;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum Side {
    /// Starts in the top triangle, heads for the bottom one
    Player1,
    /// Starts in the bottom triangle, heads for the top one
    Player2,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Player1 => 0,
            Side::Player2 => 1,
        }
    }
}

/// The six axial directions of the hexagram grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Fixed iteration order used by move generation
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Identity of a cell: its position in flat (row-major) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellId(u8);

impl CellId {
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self(index as u8)
    }

    /// Cell at `(row, col)`, or `None` if that slot is off the board
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        let size = *ROW_SIZES.get(row)?;
        if col >= size {
            return None;
        }
        Some(Self::new(ROW_STARTS[row] + col))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        topology().cell(self).row
    }

    #[inline]
    pub fn col(self) -> usize {
        topology().cell(self).col
    }

    /// Inside the first ten cells of flat order
    #[inline]
    pub fn in_top_triangle(self) -> bool {
        self.index() < TRIANGLE_SIZE
    }

    /// Inside the last ten cells of flat order
    #[inline]
    pub fn in_bottom_triangle(self) -> bool {
        self.index() >= CELL_COUNT - TRIANGLE_SIZE
    }

    /// Iterate every cell in flat order
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..CELL_COUNT).map(CellId::new)
    }
}

/// Flat index of the first cell in each row
pub const ROW_STARTS: [usize; ROW_COUNT] = {
    let mut starts = [0; ROW_COUNT];
    let mut i = 1;
    while i < ROW_COUNT {
        starts[i] = starts[i - 1] + ROW_SIZES[i - 1];
        i += 1;
    }
    starts
};

/// Content of one slot in an occupancy snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "char", into = "char")
)]
pub enum Occupancy {
    Empty,
    Player1,
    Player2,
}

impl Occupancy {
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Occupancy::Empty => '.',
            Occupancy::Player1 => 'O',
            Occupancy::Player2 => 'X',
        }
    }

    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Player1 => Some(Side::Player1),
            Occupancy::Player2 => Some(Side::Player2),
        }
    }
}

impl From<Option<Side>> for Occupancy {
    fn from(side: Option<Side>) -> Self {
        match side {
            None => Occupancy::Empty,
            Some(Side::Player1) => Occupancy::Player1,
            Some(Side::Player2) => Occupancy::Player2,
        }
    }
}

impl TryFrom<char> for Occupancy {
    type Error = EngineError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '.' => Ok(Occupancy::Empty),
            'O' => Ok(Occupancy::Player1),
            'X' => Ok(Occupancy::Player2),
            other => Err(EngineError::BadSymbol { symbol: other }),
        }
    }
}

impl From<Occupancy> for char {
    fn from(occupancy: Occupancy) -> Self {
        occupancy.symbol()
    }
}
