//! Game rules for Chinese Checkers
//!
//! This module implements the rule set:
//! - Steps to an adjacent empty cell and chained jumps over occupied cells
//! - The home-triangle rule (a piece resting in its destination stays there)
//! - Move-acceptance filters used to prune the search
//! - Win conditions

pub mod filter;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use filter::{HeuristicKind, MoveFilter};
pub use moves::{
    can_move, is_valid_jump, is_valid_step_or_jump, jump_destinations, jump_paths, legal_paths,
    playable_paths, route_to, step_destinations, try_move, valid_destinations, valid_paths,
    validate_path,
};
pub use win::{has_player1_won, has_player2_won, has_won, is_game_over, winner};
