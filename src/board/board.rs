//! Board occupancy, pieces and path application

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::topology::{topology, Topology};
use super::{
    CellId, Direction, Occupancy, Side, CELL_COUNT, PIECES_PER_SIDE, ROW_COUNT, ROW_SIZES,
    ROW_STARTS, TRIANGLE_SIZE,
};
use crate::error::{EngineError, EngineResult};

/// Index of a piece in [`Board::pieces`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u8);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A marble owned by one side. It does not know which cell holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: Side,
}

/// One turn's movement: the origin followed by every cell the piece lands on.
///
/// A step is `[origin, destination]`; a jump chain is
/// `[origin, landing1, ..., landingN]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<CellId>);

impl Path {
    pub fn new(cells: Vec<CellId>) -> Self {
        Self(cells)
    }

    /// Path with no cells ("no move")
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn origin(&self) -> Option<CellId> {
        self.0.first().copied()
    }

    #[inline]
    pub fn destination(&self) -> Option<CellId> {
        self.0.last().copied()
    }

    pub fn cells(&self) -> &[CellId] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<CellId> {
        self.0
    }
}

impl Deref for Path {
    type Target = [CellId];

    fn deref(&self) -> &[CellId] {
        &self.0
    }
}

impl From<Vec<CellId>> for Path {
    fn from(cells: Vec<CellId>) -> Self {
        Self(cells)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({},{})", cell.row(), cell.col())?;
        }
        Ok(())
    }
}

/// Game board: the shared cell graph plus who sits where
#[derive(Debug, Clone)]
pub struct Board {
    topology: &'static Topology,
    occupants: [Option<PieceId>; CELL_COUNT],
    pieces: Vec<Piece>,
}

impl Board {
    /// Starting position: player1 fills the top triangle, player2 the bottom one
    pub fn new() -> Self {
        let mut board = Self::empty();
        for i in 0..PIECES_PER_SIDE {
            board.put(CellId::new(i), Side::Player1);
        }
        for i in 0..PIECES_PER_SIDE {
            board.put(CellId::new(CELL_COUNT - PIECES_PER_SIDE + i), Side::Player2);
        }
        board
    }

    /// A board with no pieces at all
    pub fn empty() -> Self {
        Self {
            topology: topology(),
            occupants: [None; CELL_COUNT],
            pieces: Vec::with_capacity(2 * PIECES_PER_SIDE),
        }
    }

    #[inline]
    pub fn topology(&self) -> &'static Topology {
        self.topology
    }

    #[inline]
    pub fn neighbour(&self, cell: CellId, dir: Direction) -> Option<CellId> {
        self.topology.neighbour(cell, dir)
    }

    /// Piece resting on `cell`
    #[inline]
    pub fn piece_at(&self, cell: CellId) -> Option<&Piece> {
        self.occupants[cell.index()].map(|id| &self.pieces[id.index()])
    }

    /// Owner of the piece on `cell`
    #[inline]
    pub fn owner(&self, cell: CellId) -> Option<Side> {
        self.piece_at(cell).map(|p| p.owner)
    }

    #[inline]
    pub fn is_empty(&self, cell: CellId) -> bool {
        self.occupants[cell.index()].is_none()
    }

    #[inline]
    pub fn occupancy(&self, cell: CellId) -> Occupancy {
        Occupancy::from(self.owner(cell))
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_some()).count()
    }

    /// Cells holding `side`'s pieces, in flat order
    pub fn occupied_by(&self, side: Side) -> impl Iterator<Item = CellId> + '_ {
        CellId::all().filter(move |&cell| self.owner(cell) == Some(side))
    }

    /// First ten cells in flat order
    pub fn top_triangle(&self) -> impl Iterator<Item = CellId> {
        (0..TRIANGLE_SIZE).map(CellId::new)
    }

    /// Last ten cells in flat order
    pub fn bottom_triangle(&self) -> impl Iterator<Item = CellId> {
        (CELL_COUNT - TRIANGLE_SIZE..CELL_COUNT).map(CellId::new)
    }

    /// The triangle `side` must fill to win
    pub fn destination_triangle(&self, side: Side) -> impl Iterator<Item = CellId> {
        let start = match side {
            Side::Player1 => CELL_COUNT - TRIANGLE_SIZE,
            Side::Player2 => 0,
        };
        (start..start + TRIANGLE_SIZE).map(CellId::new)
    }

    #[inline]
    pub fn in_destination(&self, side: Side, cell: CellId) -> bool {
        match side {
            Side::Player1 => cell.in_bottom_triangle(),
            Side::Player2 => cell.in_top_triangle(),
        }
    }

    #[inline]
    pub fn row_of(&self, cell: CellId) -> usize {
        self.topology.cell(cell).row
    }

    /// Cell at `(row, col)` in row-major coordinates
    pub fn cell_at(&self, row: usize, col: usize) -> EngineResult<CellId> {
        CellId::from_row_col(row, col).ok_or(EngineError::UnknownCell { row, col })
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        self.occupants = [None; CELL_COUNT];
        self.pieces.clear();
    }

    /// Put a new piece for `side` on an empty cell
    pub fn place_piece(&mut self, cell: CellId, side: Side) -> EngineResult<PieceId> {
        if !self.is_empty(cell) {
            return Err(EngineError::OccupiedDestination { cell });
        }
        Ok(self.put(cell, side))
    }

    fn put(&mut self, cell: CellId, side: Side) -> PieceId {
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece { owner: side });
        self.occupants[cell.index()] = Some(id);
        id
    }

    /// Replace all occupancy with a row-major snapshot.
    ///
    /// The matrix must match [`ROW_SIZES`] exactly; otherwise the board is
    /// left as it was.
    pub fn load_occupancy(&mut self, rows: &[Vec<Occupancy>]) -> EngineResult<()> {
        if rows.len() != ROW_COUNT {
            return Err(EngineError::BadRowCount {
                expected: ROW_COUNT,
                found: rows.len(),
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != ROW_SIZES[row] {
                return Err(EngineError::BadBoardShape {
                    row,
                    expected: ROW_SIZES[row],
                    found: cells.len(),
                });
            }
        }

        self.clear();
        for (row, cells) in rows.iter().enumerate() {
            for (col, occupancy) in cells.iter().enumerate() {
                if let Some(side) = occupancy.side() {
                    self.put(CellId::new(ROW_STARTS[row] + col), side);
                }
            }
        }
        Ok(())
    }

    /// Row-major occupancy snapshot, the inverse of [`Board::load_occupancy`]
    pub fn snapshot(&self) -> Vec<Vec<Occupancy>> {
        (0..ROW_COUNT)
            .map(|row| {
                (0..ROW_SIZES[row])
                    .map(|col| self.occupancy(CellId::new(ROW_STARTS[row] + col)))
                    .collect()
            })
            .collect()
    }

    /// Move the piece on the path's origin to its last cell.
    ///
    /// Jumped-over pieces stay where they are. Fails without touching the
    /// board if the path is shorter than two cells, the origin is empty, or
    /// any landing cell is occupied.
    pub fn apply_path(&mut self, path: &Path) -> EngineResult<()> {
        if path.len() < 2 {
            return Err(EngineError::PathTooShort { len: path.len() });
        }
        let (origin, destination) = (path[0], path[path.len() - 1]);
        let Some(piece) = self.occupants[origin.index()] else {
            return Err(EngineError::EmptyOrigin { cell: origin });
        };
        if let Some(&cell) = path[1..].iter().find(|&&cell| !self.is_empty(cell)) {
            return Err(EngineError::OccupiedDestination { cell });
        }

        self.occupants[origin.index()] = None;
        self.occupants[destination.index()] = Some(piece);
        Ok(())
    }

    /// Exact inverse of [`Board::apply_path`] for the same path.
    ///
    /// Calling it with a path that was not just applied is a logic error.
    pub fn undo_path(&mut self, path: &Path) {
        let (Some(origin), Some(destination)) = (path.origin(), path.destination()) else {
            debug_assert!(false, "undo of a path without cells");
            return;
        };
        debug_assert!(path.len() >= 2, "undo of a path shorter than two cells");
        debug_assert!(self.is_empty(origin), "undo onto occupied origin {origin:?}");

        let Some(piece) = self.occupants[destination.index()].take() else {
            debug_assert!(false, "undo from empty destination {destination:?}");
            return;
        };
        self.occupants[origin.index()] = Some(piece);
    }

    /// Apply `path` and undo it when the returned guard is dropped
    pub fn apply_scoped<'a>(&'a mut self, path: &'a Path) -> EngineResult<AppliedPath<'a>> {
        self.apply_path(path)?;
        Ok(AppliedPath { board: self, path })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widest = ROW_SIZES.iter().copied().max().unwrap_or(0);
        for row in 0..ROW_COUNT {
            write!(f, "{}", " ".repeat(widest - ROW_SIZES[row]))?;
            for col in 0..ROW_SIZES[row] {
                let cell = CellId::new(ROW_STARTS[row] + col);
                write!(f, "{} ", self.occupancy(cell).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A path applied to a board, undone on drop.
///
/// Derefs to the board so a search can keep exploring below the move.
pub struct AppliedPath<'a> {
    board: &'a mut Board,
    path: &'a Path,
}

impl Deref for AppliedPath<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for AppliedPath<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedPath<'_> {
    fn drop(&mut self) {
        self.board.undo_path(self.path);
    }
}
