//! Error types for the engine
//!
//! Only recoverable, caller-facing conditions live here. Running out of
//! moves is not an error: generators return empty lists and the search
//! falls back to a static score.

use thiserror::Error;

use crate::board::CellId;

/// Errors reported by board and engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A path needs an origin and at least one destination
    #[error("Path has {len} cell(s), need at least 2")]
    PathTooShort { len: usize },

    /// No piece to move
    #[error("No piece at origin cell {cell:?}")]
    EmptyOrigin { cell: CellId },

    /// Landing cell already holds a piece
    #[error("Cell {cell:?} is already occupied")]
    OccupiedDestination { cell: CellId },

    /// Destination not reachable from origin under the move rules
    #[error("Illegal move from {from:?} to {to:?}")]
    IllegalMove { from: CellId, to: CellId },

    /// Row/column pair outside the star
    #[error("No cell at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize },

    /// Snapshot has the wrong number of rows
    #[error("Board snapshot has {found} rows, expected {expected}")]
    BadRowCount { expected: usize, found: usize },

    /// Snapshot row has the wrong number of cells
    #[error("Board snapshot row {row} has {found} cells, expected {expected}")]
    BadBoardShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Unrecognised occupancy symbol
    #[error("Unknown cell symbol {symbol:?} (expected '.', 'O' or 'X')")]
    BadSymbol { symbol: char },

    /// Engine configuration rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
