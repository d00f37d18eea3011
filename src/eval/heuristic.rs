//! Static evaluation of a board position
//!
//! The score is taken from one side's point of view:
//! - `WIN_SCORE` if that side has filled its destination triangle
//! - `-WIN_SCORE` if the opponent has
//! - otherwise the table score of its own pieces minus the opponent's

use crate::board::{Board, CellId, Side};
use crate::rules::has_won;

use super::{ScoringScheme, WIN_SCORE};

/// Evaluate the board from the perspective of `side`.
///
/// Positive values favour `side`. A decided game overrides the table
/// scores with `±WIN_SCORE`.
#[must_use]
pub fn evaluate(board: &Board, side: Side, scheme: ScoringScheme) -> i32 {
    if has_won(board, side) {
        return WIN_SCORE;
    }
    if has_won(board, side.opponent()) {
        return -WIN_SCORE;
    }
    material_score(board, side, scheme)
}

/// Sum of `side`'s cell scores minus the opponent's, each side scored
/// with its own table.
#[must_use]
pub fn material_score(board: &Board, side: Side, scheme: ScoringScheme) -> i32 {
    let topology = board.topology();
    let scheme = scheme.index();

    let mut total = 0;
    for cell in CellId::all() {
        let Some(owner) = board.owner(cell) else {
            continue;
        };
        let value = topology.cell(cell).scores[scheme][owner.index()];
        total += if owner == side { value } else { -value };
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::new();
        for scheme in [ScoringScheme::Distance, ScoringScheme::Positional] {
            assert_eq!(evaluate(&board, Side::Player1, scheme), 0);
            assert_eq!(evaluate(&board, Side::Player2, scheme), 0);
        }
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let mut board = Board::empty();
        board.place_piece(CellId::new(40), Side::Player1).unwrap();
        board.place_piece(CellId::new(70), Side::Player2).unwrap();
        board.place_piece(CellId::new(100), Side::Player1).unwrap();

        for scheme in [ScoringScheme::Distance, ScoringScheme::Positional] {
            assert_eq!(
                evaluate(&board, Side::Player1, scheme),
                -evaluate(&board, Side::Player2, scheme)
            );
        }
    }

    #[test]
    fn test_progress_improves_score() {
        let mut behind = Board::empty();
        behind.place_piece(CellId::new(20), Side::Player1).unwrap();
        let mut ahead = Board::empty();
        ahead.place_piece(CellId::new(90), Side::Player1).unwrap();

        for scheme in [ScoringScheme::Distance, ScoringScheme::Positional] {
            assert!(
                evaluate(&ahead, Side::Player1, scheme) > evaluate(&behind, Side::Player1, scheme)
            );
        }
    }

    #[test]
    fn test_filled_bottom_triangle_wins_for_player1() {
        let mut board = Board::empty();
        for i in CELL_COUNT - 10..CELL_COUNT {
            board.place_piece(CellId::new(i), Side::Player1).unwrap();
        }
        assert_eq!(evaluate(&board, Side::Player1, ScoringScheme::Distance), WIN_SCORE);
        assert_eq!(evaluate(&board, Side::Player1, ScoringScheme::Positional), WIN_SCORE);
        assert_eq!(evaluate(&board, Side::Player2, ScoringScheme::Distance), -WIN_SCORE);
    }
}
