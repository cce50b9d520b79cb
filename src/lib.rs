//! Gomoku rule engine
//!
//! Rules and move history for two-player Gomoku (five-in-a-row):
//! - Fixed N x N board (default 15x15), Black moves first
//! - Five or more in a row wins (overlines allowed)
//! - A full board without a five is a draw
//! - Undo of the last move, restart with session scores kept
//! - A center-proximity hint for the player to move
//!
//! # Architecture
//!
//! - [`board`]: Board representation, players and positions
//! - [`rules`]: Win detection and move suggestion
//! - [`config`]: Engine configuration
//! - [`engine`]: The game engine tying state, rules and history together
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::default();
//!
//! // Black builds a row on line 7, White answers on line 0
//! for col in 0..4 {
//!     engine.apply_move(7, 7 + col).unwrap();
//!     engine.apply_move(0, col).unwrap();
//! }
//! let outcome = engine.apply_move(7, 11).unwrap();
//!
//! assert!(outcome.just_won);
//! assert_eq!(engine.status(), GameStatus::Won(Player::Black));
//! assert_eq!(engine.scores().black, 1);
//! ```
//!
//! Rendering, input mapping and score display belong to the caller; the
//! engine only exposes copy-out queries and a read-only board view.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{GameEngine, GameStatus, Move, MoveOutcome, Scores};
pub use error::{ConfigError, GameError};
