//! Chinese Checkers engine for two players on the six-pointed star
//!
//! Player1 starts in the top point and races to the bottom one; player2 does
//! the reverse. A turn either steps a marble to an adjacent empty cell or
//! chains jumps over single occupied cells. The first side to fill its
//! destination triangle wins.
//!
//! # Architecture
//!
//! - [`board`]: star topology, occupancy and path application with undo
//! - [`rules`]: move generation, move filters and win detection
//! - [`eval`]: precomputed per-cell score tables and position evaluation
//! - [`search`]: minimax with alpha-beta pruning over a single mutable board
//! - [`engine`]: configuration, players and the game driver
//!
//! # Quick Start
//!
//! ```
//! use chinese_checkers::{Board, ComputerPlayer, EngineConfig, Player, Side};
//!
//! let mut board = Board::new();
//! let config = EngineConfig { depth: 2, ..EngineConfig::default() };
//! let mut ai = ComputerPlayer::with_config(Side::Player1, config).unwrap();
//!
//! if let Some(path) = ai.choose_path(&mut board) {
//!     board.apply_path(&path).unwrap();
//!     println!("AI plays {path}");
//! }
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, CellId, Occupancy, Path, Side, CELL_COUNT, ROW_COUNT, ROW_SIZES};
pub use engine::{
    ComputerPlayer, EngineConfig, Game, GameOutcome, HumanPlayer, MoveResult, Player, TurnRecord,
};
pub use error::{EngineError, EngineResult};
pub use eval::{evaluate, ScoringScheme, WIN_SCORE};
pub use rules::{HeuristicKind, MoveFilter};
pub use search::{search, SearchResult, Searcher};
