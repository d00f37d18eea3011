//! Per-cell score tables, computed once with the board graph

use std::collections::VecDeque;

use crate::board::{Cell, CellId, Side, CELL_COUNT, ROW_COUNT, ROW_SIZES, TRIANGLE_SIZE};

use super::ScoringScheme;

/// Score of the destination corner in the distance table
const CORNER_SCORE: i32 = 16;
/// Distance-table bonus for cells inside the destination triangle
const DISTANCE_HOME_BONUS: i32 = 5;
/// Positional-table weight of one row of progress
const ROW_WEIGHT: i32 = 10;
/// Positional-table bonus for cells inside the destination triangle
const POSITIONAL_HOME_BONUS: i32 = 50;

/// Fill `scores` of every cell for both schemes and both sides
pub(crate) fn precompute_scores(cells: &mut [Cell]) {
    debug_assert_eq!(cells.len(), CELL_COUNT);
    for side in [Side::Player1, Side::Player2] {
        distance_scores(cells, side);
        positional_scores(cells, side);
    }
}

/// Corner cell of `side`'s destination triangle
fn destination_corner(side: Side) -> CellId {
    match side {
        Side::Player1 => CellId::new(CELL_COUNT - 1),
        Side::Player2 => CellId::new(0),
    }
}

fn in_destination(side: Side, cell: CellId) -> bool {
    match side {
        Side::Player1 => cell.index() >= CELL_COUNT - TRIANGLE_SIZE,
        Side::Player2 => cell.index() < TRIANGLE_SIZE,
    }
}

/// Label propagation from the destination corner: each step away costs one
/// point and a cell keeps the largest label that reaches it.
fn distance_scores(cells: &mut [Cell], side: Side) {
    let scheme = ScoringScheme::Distance.index();
    let s = side.index();

    let mut labels = [i32::MIN; CELL_COUNT];
    let corner = destination_corner(side);
    labels[corner.index()] = CORNER_SCORE;

    let mut pending = VecDeque::from([corner]);
    while let Some(current) = pending.pop_front() {
        let next = labels[current.index()] - 1;
        for neighbour in cells[current.index()].neighbours.iter().flatten() {
            if next > labels[neighbour.index()] {
                labels[neighbour.index()] = next;
                pending.push_back(*neighbour);
            }
        }
    }

    for (i, cell) in cells.iter_mut().enumerate() {
        let mut score = labels[i];
        if in_destination(side, CellId::new(i)) {
            score += DISTANCE_HOME_BONUS;
        }
        cell.scores[scheme][s] = score;
    }
}

fn positional_scores(cells: &mut [Cell], side: Side) {
    let scheme = ScoringScheme::Positional.index();
    let s = side.index();

    for (i, cell) in cells.iter_mut().enumerate() {
        let progress = match side {
            Side::Player1 => cell.row,
            Side::Player2 => ROW_COUNT - 1 - cell.row,
        } as i32;
        let mut score = progress * ROW_WEIGHT - centre_offset(ROW_SIZES[cell.row], cell.col);
        if in_destination(side, CellId::new(i)) {
            score += POSITIONAL_HOME_BONUS;
        }
        cell.scores[scheme][s] = score;
    }
}

/// Horizontal distance from the middle of a row; even rows have two middle cells
fn centre_offset(len: usize, col: usize) -> i32 {
    let (len, col) = (len as i32, col as i32);
    if len % 2 == 0 {
        (2 * col - (len - 1)).abs() / 2
    } else {
        (len / 2 - col).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{topology, ROW_STARTS};

    fn score(cell: CellId, scheme: ScoringScheme, side: Side) -> i32 {
        topology().cell(cell).scores[scheme.index()][side.index()]
    }

    #[test]
    fn test_centre_offset() {
        assert_eq!(centre_offset(1, 0), 0);
        assert_eq!(centre_offset(13, 6), 0);
        assert_eq!(centre_offset(13, 0), 6);
        // Even rows: both middle cells are at offset 0
        assert_eq!(centre_offset(4, 0), 1);
        assert_eq!(centre_offset(4, 1), 0);
        assert_eq!(centre_offset(4, 2), 0);
        assert_eq!(centre_offset(4, 3), 1);
        assert_eq!(centre_offset(10, 0), 4);
    }

    #[test]
    fn test_distance_corner_values() {
        // Own destination corner: seed plus home bonus
        assert_eq!(score(CellId::new(CELL_COUNT - 1), ScoringScheme::Distance, Side::Player1), 21);
        assert_eq!(score(CellId::new(0), ScoringScheme::Distance, Side::Player2), 21);
        // Opposite corner is 16 steps away
        assert_eq!(score(CellId::new(0), ScoringScheme::Distance, Side::Player1), 0);
        assert_eq!(score(CellId::new(CELL_COUNT - 1), ScoringScheme::Distance, Side::Player2), 0);
    }

    #[test]
    fn test_distance_every_cell_reached() {
        for cell in CellId::all() {
            for side in [Side::Player1, Side::Player2] {
                let s = score(cell, ScoringScheme::Distance, side);
                assert!(s > i32::MIN / 2, "cell {cell:?} never labelled");
                assert!(s <= CORNER_SCORE + DISTANCE_HOME_BONUS);
            }
        }
    }

    #[test]
    fn test_distance_drops_by_one_per_step() {
        // Neighbouring labels differ by at most one outside the home bonus
        let topo = topology();
        for cell in CellId::all().filter(|c| !in_destination(Side::Player1, *c)) {
            for (_, n) in topo.neighbours(cell) {
                if in_destination(Side::Player1, n) {
                    continue;
                }
                let a = score(cell, ScoringScheme::Distance, Side::Player1);
                let b = score(n, ScoringScheme::Distance, Side::Player1);
                assert!((a - b).abs() <= 1, "{cell:?}={a} {n:?}={b}");
            }
        }
    }

    #[test]
    fn test_positional_mirrors_between_sides() {
        let top = CellId::new(0);
        let bottom = CellId::new(CELL_COUNT - 1);
        assert_eq!(score(top, ScoringScheme::Positional, Side::Player1), 0);
        assert_eq!(score(bottom, ScoringScheme::Positional, Side::Player1), 160 + 50);
        assert_eq!(score(bottom, ScoringScheme::Positional, Side::Player2), 0);
        assert_eq!(score(top, ScoringScheme::Positional, Side::Player2), 160 + 50);
    }

    #[test]
    fn test_positional_row_centre() {
        // Row 8 has 9 cells, centre at column 4
        let centre = CellId::new(ROW_STARTS[8] + 4);
        let edge = CellId::new(ROW_STARTS[8]);
        assert_eq!(score(centre, ScoringScheme::Positional, Side::Player1), 80);
        assert_eq!(score(edge, ScoringScheme::Positional, Side::Player1), 76);
        assert_eq!(score(centre, ScoringScheme::Positional, Side::Player2), 80);
    }
}
