//! Minimax search with alpha-beta pruning
//!
//! The search works on a single board in place: every candidate path is
//! applied through [`Board::apply_scoped`], explored, and undone when the
//! guard drops, so the board is back to its original state on every return.
//!
//! # Example
//!
//! ```
//! use chinese_checkers::board::{Board, Side};
//! use chinese_checkers::eval::ScoringScheme;
//! use chinese_checkers::rules::HeuristicKind;
//! use chinese_checkers::search::Searcher;
//!
//! let mut board = Board::new();
//! let filter = HeuristicKind::Forward;
//! let mut searcher = Searcher::new(Side::Player1, ScoringScheme::Distance, &filter);
//!
//! let result = searcher.search(&mut board, 2);
//! if let Some(path) = result.best_path() {
//!     println!("Best path: {path}");
//! }
//! ```

use log::{debug, trace};

use crate::board::{Board, CellId, Path, Side};
use crate::eval::{evaluate, ScoringScheme};
use crate::rules::{is_game_over, valid_paths, MoveFilter};

/// Initial alpha-beta window
pub const INF: i32 = 1_000_000_000;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Positions scored statically (depth exhausted, game over or no move)
    pub leaves: u64,
    /// Sibling loops cut short by the alpha-beta window
    pub cutoffs: u64,
}

/// Search result containing the best path found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best path for the searching side, empty if it cannot move
    pub path: Path,
    /// Minimax value of the root from the searching side's view
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn best_path(&self) -> Option<&Path> {
        (!self.path.is_empty()).then_some(&self.path)
    }
}

/// Alpha-beta searcher for one side.
///
/// The side, scoring scheme and move filter stay fixed for the whole
/// search; plies alternate between that side (maximizing) and its
/// opponent (minimizing).
pub struct Searcher<'f> {
    side: Side,
    scheme: ScoringScheme,
    filter: &'f dyn MoveFilter,
    root_depth: u8,
    stats: SearchStats,
}

impl<'f> Searcher<'f> {
    pub fn new(side: Side, scheme: ScoringScheme, filter: &'f dyn MoveFilter) -> Self {
        Self {
            side,
            scheme,
            filter,
            root_depth: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `depth` plies from the current position.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        self.root_depth = depth;

        let (score, path) = self.alpha_beta(board, depth, true, -INF, INF);

        debug!(
            "{:?} searched depth {} ({:?}): score {}, {} nodes, {} cutoffs, path of {} cell(s)",
            self.side,
            depth,
            self.scheme,
            score,
            self.stats.nodes,
            self.stats.cutoffs,
            path.len()
        );

        SearchResult {
            path,
            score,
            depth,
            stats: self.stats.clone(),
        }
    }

    /// One ply of minimax with alpha-beta pruning.
    ///
    /// Leaves score `evaluate + depth`, so faster wins rank higher. A side
    /// with no legal path is scored statically without the depth bonus.
    /// Ties keep the first path found.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Path) {
        self.stats.nodes += 1;

        if depth == 0 || is_game_over(board) {
            self.stats.leaves += 1;
            let score = evaluate(board, self.side, self.scheme) + i32::from(depth);
            return (score, Path::empty());
        }

        let mover = if maximizing { self.side } else { self.side.opponent() };
        let origins: Vec<CellId> = board.occupied_by(mover).collect();
        let mut best: Option<(i32, Path)> = None;

        'pieces: for origin in origins {
            for path in valid_paths(board, origin, self.filter) {
                let score = {
                    let Ok(mut child) = board.apply_scoped(&path) else {
                        debug_assert!(false, "generated path {path:?} failed to apply");
                        continue;
                    };
                    self.alpha_beta(&mut child, depth - 1, !maximizing, alpha, beta).0
                };

                if depth == self.root_depth {
                    trace!("root path {path}: {score}");
                }

                let improves = match &best {
                    None => true,
                    Some((best_score, _)) if maximizing => score > *best_score,
                    Some((best_score, _)) => score < *best_score,
                };
                if improves {
                    best = Some((score, path));
                }

                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break 'pieces;
                }
            }
        }

        best.unwrap_or_else(|| {
            self.stats.leaves += 1;
            (evaluate(board, self.side, self.scheme), Path::empty())
        })
    }
}

/// Run a fresh search for `side`
pub fn search(
    board: &mut Board,
    depth: u8,
    side: Side,
    filter: &dyn MoveFilter,
    scheme: ScoringScheme,
) -> SearchResult {
    Searcher::new(side, scheme, filter).search(board, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::WIN_SCORE;
    use crate::rules::HeuristicKind;

    /// Plain minimax over the same move order, no pruning
    fn full_width(
        board: &mut Board,
        depth: u8,
        side: Side,
        scheme: ScoringScheme,
        maximizing: bool,
    ) -> (i32, Path) {
        if depth == 0 || is_game_over(board) {
            return (evaluate(board, side, scheme) + i32::from(depth), Path::empty());
        }

        let mover = if maximizing { side } else { side.opponent() };
        let origins: Vec<CellId> = board.occupied_by(mover).collect();
        let mut best: Option<(i32, Path)> = None;
        for origin in origins {
            for path in valid_paths(board, origin, &HeuristicKind::AcceptAll) {
                board.apply_path(&path).unwrap();
                let (score, _) = full_width(board, depth - 1, side, scheme, !maximizing);
                board.undo_path(&path);

                let improves = match &best {
                    None => true,
                    Some((b, _)) if maximizing => score > *b,
                    Some((b, _)) => score < *b,
                };
                if improves {
                    best = Some((score, path));
                }
            }
        }
        best.unwrap_or_else(|| (evaluate(board, side, scheme), Path::empty()))
    }

    fn place(board: &mut Board, row: usize, col: usize, side: Side) -> CellId {
        let cell = board.cell_at(row, col).unwrap();
        board.place_piece(cell, side).unwrap();
        cell
    }

    /// Two pieces each, close enough to jump over each other
    fn small_position() -> Board {
        let mut board = Board::empty();
        place(&mut board, 7, 3, Side::Player1);
        place(&mut board, 8, 4, Side::Player1);
        place(&mut board, 9, 4, Side::Player2);
        place(&mut board, 10, 6, Side::Player2);
        board
    }

    #[test]
    fn test_depth_zero_returns_static_score() {
        let mut board = Board::new();
        let filter = HeuristicKind::AcceptAll;
        let result = search(&mut board, 0, Side::Player1, &filter, ScoringScheme::Distance);

        assert!(result.path.is_empty());
        assert!(result.best_path().is_none());
        assert_eq!(result.score, evaluate(&board, Side::Player1, ScoringScheme::Distance));
        assert_eq!(result.stats.nodes, 1);
    }

    #[test]
    fn test_alpha_beta_matches_full_width() {
        for scheme in [ScoringScheme::Distance, ScoringScheme::Positional] {
            for side in [Side::Player1, Side::Player2] {
                let mut board = small_position();
                let expected = full_width(&mut board, 3, side, scheme, true);

                let filter = HeuristicKind::AcceptAll;
                let result = search(&mut board, 3, side, &filter, scheme);

                assert_eq!(result.score, expected.0, "{side:?} {scheme:?}");
                assert_eq!(result.path, expected.1, "{side:?} {scheme:?}");
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut board = small_position();
        let filter = HeuristicKind::AcceptAll;
        let mut searcher = Searcher::new(Side::Player1, ScoringScheme::Distance, &filter);
        let result = searcher.search(&mut board, 3);

        assert!(result.stats.cutoffs > 0);
        assert!(result.stats.leaves < result.stats.nodes);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        let before = board.snapshot();
        let filter = HeuristicKind::Forward;

        let result = search(&mut board, 2, Side::Player2, &filter, ScoringScheme::Positional);
        assert!(result.best_path().is_some());
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.piece_count(), 20);
    }

    #[test]
    fn test_search_is_deterministic() {
        let filter = HeuristicKind::Forward;
        let mut board = Board::new();
        let a = search(&mut board, 2, Side::Player1, &filter, ScoringScheme::Distance);
        let b = search(&mut board, 2, Side::Player1, &filter, ScoringScheme::Distance);
        assert_eq!(a.path, b.path);
        assert_eq!(a.score, b.score);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_search_takes_immediate_win() {
        let mut board = Board::empty();
        let gap = board.cell_at(13, 0).unwrap();
        for cell in board.bottom_triangle().filter(|&c| c != gap).collect::<Vec<_>>() {
            board.place_piece(cell, Side::Player1).unwrap();
        }
        let runner = place(&mut board, 12, 4, Side::Player1);
        place(&mut board, 2, 1, Side::Player2);

        let filter = HeuristicKind::AcceptAll;
        let result = search(&mut board, 2, Side::Player1, &filter, ScoringScheme::Distance);

        assert_eq!(result.path.cells(), &[runner, gap]);
        // Win found with one ply to spare
        assert_eq!(result.score, WIN_SCORE + 1);
    }

    #[test]
    fn test_side_without_moves_scores_statically() {
        let mut board = Board::empty();
        place(&mut board, 8, 4, Side::Player2);

        let filter = HeuristicKind::AcceptAll;
        let result = search(&mut board, 3, Side::Player1, &filter, ScoringScheme::Distance);

        assert!(result.path.is_empty());
        assert_eq!(result.score, evaluate(&board, Side::Player1, ScoringScheme::Distance));
    }

    #[test]
    fn test_forward_filter_respected_at_root() {
        let mut board = Board::new();
        let filter = HeuristicKind::Forward;
        let result = search(&mut board, 1, Side::Player1, &filter, ScoringScheme::Distance);

        let path = result.best_path().unwrap();
        let (from, to) = (path.origin().unwrap(), path.destination().unwrap());
        assert!(to.row() >= from.row());
    }
}
