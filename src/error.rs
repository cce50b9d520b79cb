//! Error types

use thiserror::Error;

/// Rejected engine operations. None of these leave partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("game is already over")]
    GameAlreadyOver,
}

/// Invalid engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is not supported (expected 5..=255)")]
    BoardSize(usize),

    #[error("invalid value {value:?} for {key}")]
    Parse { key: &'static str, value: String },
}
