//! Move suggestion
//!
//! The hint is a positional heuristic only: the empty cell closest to the
//! center by Manhattan distance. It does not evaluate threats.

use crate::board::{Board, Pos};

/// Suggest the empty cell nearest the board center.
///
/// Ties keep row-major scan order. Returns `None` on a full board.
pub fn suggest_move(board: &Board) -> Option<Pos> {
    let center = board.center();
    // min_by_key returns the first minimum, which matches a stable sort of
    // the row-major enumeration.
    board.empty_positions().min_by_key(|p| p.manhattan(center))
}
