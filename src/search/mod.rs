//! Search module for Chinese Checkers AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning over in-place apply/undo

pub mod minimax;

pub use minimax::{search, SearchResult, SearchStats, Searcher, INF};
