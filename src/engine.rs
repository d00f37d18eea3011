//! Players and the game driver
//!
//! A [`Player`] picks a path for its side each turn:
//! - [`ComputerPlayer`] runs the alpha-beta search with its [`EngineConfig`]
//! - [`HumanPlayer`] hands every playable path to a caller-supplied selector, so
//!   console or network input stays outside the engine
//!
//! [`Game`] alternates two players on one board, starting with player1,
//! until someone wins, a side cannot or will not move, or the turn limit
//! runs out.
//!
//! # Example
//!
//! ```
//! use chinese_checkers::{ComputerPlayer, EngineConfig, Game, Side};
//!
//! let config = EngineConfig { depth: 1, ..EngineConfig::default() };
//! let mut game = Game::new(
//!     ComputerPlayer::new(Side::Player1, config),
//!     ComputerPlayer::new(Side::Player2, config),
//!     4,
//! );
//! let outcome = game.run().unwrap();
//! println!("{outcome:?} after {} turns", game.history().len());
//! ```

use std::time::Instant;

use log::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Path, Side};
use crate::error::{EngineError, EngineResult};
use crate::eval::ScoringScheme;
use crate::rules::{can_move, playable_paths, winner, HeuristicKind};
use crate::search::{SearchResult, Searcher};

/// Search settings for a computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EngineConfig {
    /// Plies to search
    pub depth: u8,
    /// Evaluation table for leaves
    pub scheme: ScoringScheme,
    /// Move filter applied at every ply
    pub heuristic: HeuristicKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            scheme: ScoringScheme::Distance,
            heuristic: HeuristicKind::Forward,
        }
    }
}

impl EngineConfig {
    /// Reject settings that can never produce a move
    pub fn validate(&self) -> EngineResult<()> {
        if self.depth == 0 {
            return Err(EngineError::InvalidConfig {
                message: "search depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a move search with timing.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best path found, if any
    pub best_path: Option<Path>,
    /// Minimax score of the root
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        let best_path = result.best_path().cloned();
        Self {
            best_path,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Anything that can choose a path for one side
pub trait Player {
    fn side(&self) -> Side;

    /// Pick a path for this turn, or `None` if there is nothing to play.
    ///
    /// The board may be mutated while deciding but must be restored.
    fn choose_path(&mut self, board: &mut Board) -> Option<Path>;
}

/// Player driven by the alpha-beta search
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    side: Side,
    config: EngineConfig,
}

impl ComputerPlayer {
    pub fn new(side: Side, config: EngineConfig) -> Self {
        Self { side, config }
    }

    /// Build a player after checking its configuration
    pub fn with_config(side: Side, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::new(side, config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search the position and report the best path with statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let filter = self.config.heuristic;
        let mut searcher = Searcher::new(self.side, self.config.scheme, &filter);
        let result = searcher.search(board, self.config.depth);
        MoveResult::from_search(result, start.elapsed().as_millis() as u64)
    }
}

impl Player for ComputerPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn choose_path(&mut self, board: &mut Board) -> Option<Path> {
        let result = self.get_move_with_stats(board);
        match &result.best_path {
            Some(path) => debug!(
                "{:?} picked {} (score {}, {} nodes, {}ms)",
                self.side, path, result.score, result.nodes, result.time_ms
            ),
            None => warn!("{:?} found no move (score {})", self.side, result.score),
        }
        result.best_path
    }
}

/// Player whose choice comes from outside the engine.
///
/// The selector receives the board and one path per cell each piece may
/// finish on, stops in the middle of a jump chain included (see
/// [`playable_paths`]), and returns the index of the chosen one. Returning
/// `None` or an index out of range declines the turn.
pub struct HumanPlayer<F> {
    side: Side,
    selector: F,
}

impl<F> HumanPlayer<F>
where
    F: FnMut(&Board, &[Path]) -> Option<usize>,
{
    pub fn new(side: Side, selector: F) -> Self {
        Self { side, selector }
    }
}

impl<F> Player for HumanPlayer<F>
where
    F: FnMut(&Board, &[Path]) -> Option<usize>,
{
    fn side(&self) -> Side {
        self.side
    }

    fn choose_path(&mut self, board: &mut Board) -> Option<Path> {
        let mut paths = playable_paths(board, self.side);
        if paths.is_empty() {
            return None;
        }
        let choice = (self.selector)(board, &paths)?;
        (choice < paths.len()).then(|| paths.swap_remove(choice))
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    /// This side filled its destination triangle
    Won(Side),
    /// This side had no legal path
    NoMove(Side),
    /// This side had legal paths but its player chose none
    Declined(Side),
    /// Turn limit reached without a winner
    TurnLimit,
}

/// A played turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub side: Side,
    pub path: Path,
}

/// Two players taking turns on one board
pub struct Game<A, B> {
    board: Board,
    player1: A,
    player2: B,
    to_move: Side,
    max_turns: usize,
    history: Vec<TurnRecord>,
}

impl<A: Player, B: Player> Game<A, B> {
    /// New game from the starting position
    pub fn new(player1: A, player2: B, max_turns: usize) -> Self {
        Self::from_board(Board::new(), player1, player2, max_turns)
    }

    /// New game from an arbitrary position, player1 to move
    pub fn from_board(board: Board, player1: A, player2: B, max_turns: usize) -> Self {
        debug_assert_eq!(player1.side(), Side::Player1);
        debug_assert_eq!(player2.side(), Side::Player2);
        Self {
            board,
            player1,
            player2,
            to_move: Side::Player1,
            max_turns,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Play one turn. Returns the outcome once the game is over.
    pub fn play_turn(&mut self) -> EngineResult<Option<GameOutcome>> {
        if let Some(side) = winner(&self.board) {
            return Ok(Some(GameOutcome::Won(side)));
        }
        if self.history.len() >= self.max_turns {
            return Ok(Some(GameOutcome::TurnLimit));
        }

        let side = self.to_move;
        let choice = match side {
            Side::Player1 => self.player1.choose_path(&mut self.board),
            Side::Player2 => self.player2.choose_path(&mut self.board),
        };
        let Some(path) = choice else {
            let outcome = if can_move(&self.board, side) {
                GameOutcome::Declined(side)
            } else {
                GameOutcome::NoMove(side)
            };
            return Ok(Some(outcome));
        };

        self.board.apply_path(&path)?;
        info!("turn {}: {:?} plays {}", self.history.len() + 1, side, path);
        self.history.push(TurnRecord { side, path });
        self.to_move = side.opponent();

        Ok(winner(&self.board).map(GameOutcome::Won))
    }

    /// Play until the game is over
    pub fn run(&mut self) -> EngineResult<GameOutcome> {
        loop {
            if let Some(outcome) = self.play_turn()? {
                return Ok(outcome);
            }
        }
    }
}
