//! Evaluation module for Chinese Checkers positions
//!
//! Every cell carries two precomputed scores per side:
//! - [`ScoringScheme::Distance`]: closeness to the far corner along the graph
//! - [`ScoringScheme::Positional`]: row progress minus distance from the row centre
//!
//! A position is scored by summing the cells under each side's pieces.

pub mod heuristic;
pub mod tables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use heuristic::{evaluate, material_score};

/// Score of a won position (negated for a lost one)
pub const WIN_SCORE: i32 = 1_000_000;

/// Which per-cell score table to evaluate with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "lowercase"))]
pub enum ScoringScheme {
    /// Graph distance from the destination corner
    #[default]
    Distance,
    /// Row index and centring
    Positional,
}

impl ScoringScheme {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ScoringScheme::Distance => 0,
            ScoringScheme::Positional => 1,
        }
    }
}
