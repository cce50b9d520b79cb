//! Five-in-a-row detection
//!
//! A move wins when an unbroken run of five or more stones of the same
//! color passes through the stone just placed. Only the four lines through
//! that stone are scanned, so each check touches at most 32 cells.

use crate::board::{Board, Player, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Count same-color stones from `pos` along (dr, dc), excluding `pos` itself.
///
/// Stops at the first mismatch, the board edge, or after `WIN_LENGTH - 1` steps.
#[inline]
fn count_direction(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    for i in 1..WIN_LENGTH as i32 {
        let r = pos.row as i32 + dr * i;
        let c = pos.col as i32 + dc * i;
        match board.pos(r, c) {
            Some(next) if board.get(next) == stone => count += 1,
            _ => break,
        }
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks 4 directions from the given position. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    let stone = Stone::from(player);
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + count_direction(board, pos, stone, dr, dc)
            + count_direction(board, pos, stone, -dr, -dc);
        count >= WIN_LENGTH
    })
}

/// Find the run of five or more through `pos`, if any.
///
/// Unlike `has_five_at_pos` the walk is not capped, so an overline is
/// returned in full. Positions are ordered from the negative end to the
/// positive end of the line.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    let stone = Stone::from(player);
    if board.get(pos) != stone {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        let (mut r, mut c) = (pos.row as i32 - dr, pos.col as i32 - dc);
        while let Some(prev) = board.pos(r, c).filter(|&p| board.get(p) == stone) {
            line.insert(0, prev);
            r -= dr;
            c -= dc;
        }

        // Extend in positive direction
        let (mut r, mut c) = (pos.row as i32 + dr, pos.col as i32 + dc);
        while let Some(next) = board.pos(r, c).filter(|&p| board.get(p) == stone) {
            line.push(next);
            r += dr;
            c += dc;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
