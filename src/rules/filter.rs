//! Move-acceptance filters
//!
//! A filter sees only the endpoints of a candidate path, never the
//! intermediate landings of a jump chain.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{CellId, Side};

/// Decides whether a `from -> to` move by `mover` is worth considering
pub trait MoveFilter {
    fn accept(&self, mover: Side, from: CellId, to: CellId) -> bool;
}

impl<F> MoveFilter for F
where
    F: Fn(Side, CellId, CellId) -> bool,
{
    #[inline]
    fn accept(&self, mover: Side, from: CellId, to: CellId) -> bool {
        self(mover, from, to)
    }
}

/// Built-in filters selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    /// Every legal move
    AcceptAll,
    /// Never move away from the destination: player1 keeps its row or goes
    /// down, player2 keeps its row or goes up.
    ///
    /// The direction follows the side moving at each ply, so opponent plies
    /// inside a search are held to the opponent's own forward direction
    /// rather than the searching side's.
    #[default]
    Forward,
}

impl MoveFilter for HeuristicKind {
    #[inline]
    fn accept(&self, mover: Side, from: CellId, to: CellId) -> bool {
        match self {
            HeuristicKind::AcceptAll => true,
            HeuristicKind::Forward => match mover {
                Side::Player1 => to.row() >= from.row(),
                Side::Player2 => to.row() <= from.row(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_filter_direction() {
        let top = CellId::new(0);
        let below = CellId::new(1);
        let beside = CellId::new(2);

        assert!(HeuristicKind::Forward.accept(Side::Player1, top, below));
        assert!(!HeuristicKind::Forward.accept(Side::Player1, below, top));
        assert!(HeuristicKind::Forward.accept(Side::Player2, below, top));
        assert!(!HeuristicKind::Forward.accept(Side::Player2, top, below));
        // Sideways moves are fine for both
        assert!(HeuristicKind::Forward.accept(Side::Player1, below, beside));
        assert!(HeuristicKind::Forward.accept(Side::Player2, below, beside));
    }

    #[test]
    fn test_accept_all_and_closures() {
        let a = CellId::new(5);
        let b = CellId::new(0);
        assert!(HeuristicKind::AcceptAll.accept(Side::Player1, a, b));

        let never = |_: Side, _: CellId, _: CellId| false;
        assert!(!never.accept(Side::Player2, a, b));
    }
}
