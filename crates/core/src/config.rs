//! Game rules configuration, validated at construction.

use thiserror::Error;

use crate::types::{ANIMATION_RATE, INITIAL_TILES, MAX_EXPONENT, MIN_EXPONENT};

/// Error type for rejected game configurations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The board must have at least one cell
    #[error("board dimension must be at least 1")]
    EmptyBoard,
    /// More starting tiles than cells
    #[error("{tiles} initial tiles do not fit on a board of {cells} cells")]
    TooManyInitialTiles { tiles: usize, cells: usize },
    /// Spawn exponent whose value does not fit a u64
    #[error("minimum exponent {0} exceeds {}", MAX_EXPONENT)]
    ExponentOutOfRange(u8),
    /// Animation rate must be a positive finite number
    #[error("invalid animation rate {0}")]
    InvalidAnimationRate(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Tiles placed on a fresh board
    pub initial_tiles: usize,
    /// Exponent of seeded and spawned tiles
    pub min_exponent: u8,
    /// Animation progress per second of frame time
    pub animation_rate: f32,
    /// Minimum accumulated frame time between spawns; 0 disables the cooldown
    pub spawn_cooldown_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_tiles: INITIAL_TILES,
            min_exponent: MIN_EXPONENT,
            animation_rate: ANIMATION_RATE,
            spawn_cooldown_ms: 0,
        }
    }
}

impl GameConfig {
    pub fn with_spawn_cooldown_ms(mut self, cooldown_ms: u32) -> Self {
        self.spawn_cooldown_ms = cooldown_ms;
        self
    }

    /// Check this configuration against a board of dimension `N`.
    pub fn validate<const N: usize>(&self) -> Result<(), ConfigError> {
        if N == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let cells = N * N;
        if self.initial_tiles > cells {
            return Err(ConfigError::TooManyInitialTiles {
                tiles: self.initial_tiles,
                cells,
            });
        }
        if self.min_exponent > MAX_EXPONENT {
            return Err(ConfigError::ExponentOutOfRange(self.min_exponent));
        }
        if !self.animation_rate.is_finite() || self.animation_rate <= 0.0 {
            return Err(ConfigError::InvalidAnimationRate(self.animation_rate));
        }
        Ok(())
    }
}
