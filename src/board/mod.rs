//! Board representation for Gomoku

pub mod board;


use serde::{Deserialize, Serialize};

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Player colors. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// The player owning this stone, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
            Stone::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

impl From<Player> for Stone {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

/// Position on the board (zero-based row and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        (self.row.abs_diff(other.row) as u32) + (self.col.abs_diff(other.col) as u32)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
