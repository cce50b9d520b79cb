//! Game rules for standard Gomoku
//!
//! This module implements:
//! - Win condition (five or more in a row through the last stone)
//! - Move suggestion (center-proximity hint)

pub mod hint;
pub mod win;

// Re-exports for convenient access
pub use hint::suggest_move;
pub use win::{find_five_line_at_pos, has_five_at_pos, DIRECTIONS, WIN_LENGTH};
