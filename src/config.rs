//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::ConfigError;

/// Smallest board that can hold a five
pub const MIN_BOARD_SIZE: usize = 5;
/// Coordinates are stored as `u8`
pub const MAX_BOARD_SIZE: usize = 255;

/// Environment variable read by [`EngineConfig::from_env`]
pub const BOARD_SIZE_ENV: &str = "GOMOKU_BOARD_SIZE";

/// Construction-time engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the N x N board
    pub board_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self { board_size }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(ConfigError::BoardSize(self.board_size))
        }
    }

    /// Load from `GOMOKU_BOARD_SIZE`, falling back to the default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(BOARD_SIZE_ENV) {
            config.board_size = value.trim().parse().map_err(|_| ConfigError::Parse {
                key: BOARD_SIZE_ENV,
                value,
            })?;
        }
        config.validate()?;
        Ok(config)
    }
}
