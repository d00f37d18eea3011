//! Win condition checking
//!
//! A side wins when every cell of its destination triangle is occupied and
//! at least one of them holds its own piece. Opponent pieces parked in the
//! triangle therefore count towards filling it.

use crate::board::{Board, Side};

/// Check if `side` has filled its destination triangle
pub fn has_won(board: &Board, side: Side) -> bool {
    let mut any_own = false;
    for cell in board.destination_triangle(side) {
        match board.owner(cell) {
            None => return false,
            Some(owner) => any_own |= owner == side,
        }
    }
    any_own
}

#[inline]
pub fn has_player1_won(board: &Board) -> bool {
    has_won(board, Side::Player1)
}

#[inline]
pub fn has_player2_won(board: &Board) -> bool {
    has_won(board, Side::Player2)
}

/// Winner of the position, player1 checked first
pub fn winner(board: &Board) -> Option<Side> {
    if has_player1_won(board) {
        Some(Side::Player1)
    } else if has_player2_won(board) {
        Some(Side::Player2)
    } else {
        None
    }
}

/// Either side has won
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    has_player1_won(board) || has_player2_won(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CellId, Path, CELL_COUNT};

    fn fill_bottom(board: &mut Board, side: Side) {
        for i in CELL_COUNT - 10..CELL_COUNT {
            board.place_piece(CellId::new(i), side).unwrap();
        }
    }

    #[test]
    fn test_fresh_board_is_not_over() {
        let board = Board::new();
        assert!(!has_player1_won(&board));
        assert!(!has_player2_won(&board));
        assert!(!is_game_over(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_filled_bottom_triangle_wins_for_player1() {
        let mut board = Board::empty();
        fill_bottom(&mut board, Side::Player1);
        assert!(has_player1_won(&board));
        assert!(!has_player2_won(&board));
        assert_eq!(winner(&board), Some(Side::Player1));
    }

    #[test]
    fn test_one_gap_is_not_a_win() {
        let mut board = Board::empty();
        for i in CELL_COUNT - 10..CELL_COUNT - 1 {
            board.place_piece(CellId::new(i), Side::Player1).unwrap();
        }
        assert!(!has_player1_won(&board));
    }

    #[test]
    fn test_triangle_shared_with_opponent_still_wins() {
        // Nine blockers and a single own piece fill the triangle
        let mut board = Board::empty();
        for i in CELL_COUNT - 10..CELL_COUNT - 1 {
            board.place_piece(CellId::new(i), Side::Player2).unwrap();
        }
        board
            .place_piece(CellId::new(CELL_COUNT - 1), Side::Player1)
            .unwrap();
        assert!(has_player1_won(&board));
    }

    #[test]
    fn test_triangle_filled_only_by_opponent_is_not_a_win() {
        let mut board = Board::empty();
        fill_bottom(&mut board, Side::Player2);
        assert!(!has_player1_won(&board));
    }

    #[test]
    fn test_win_reached_by_stepping_into_last_gap() {
        let mut board = Board::empty();
        let gap = board.cell_at(13, 0).unwrap();
        for cell in board.bottom_triangle().filter(|&c| c != gap).collect::<Vec<_>>() {
            board.place_piece(cell, Side::Player1).unwrap();
        }
        let outside = board.cell_at(12, 4).unwrap();
        board.place_piece(outside, Side::Player1).unwrap();
        assert!(!has_player1_won(&board));

        let path = Path::new(vec![outside, gap]);
        board.apply_path(&path).unwrap();
        assert!(has_player1_won(&board));
        assert!(is_game_over(&board));

        board.undo_path(&path);
        assert!(!has_player1_won(&board));
    }
}
