//! Runner configuration read from environment variables.

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::core::GameConfig;
use crate::types::{SPAWN_COOLDOWN_MS, TARGET_FPS};

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

/// Runner configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: u32,
    pub fps: u32,
    pub spawn_cooldown_ms: u32,
    /// Log file; logging is off when unset.
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            fps: TARGET_FPS,
            spawn_cooldown_ms: SPAWN_COOLDOWN_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl RunConfig {
    /// Create from `TWENTY48_*` environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get("TWENTY48_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let fps = get("TWENTY48_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(TARGET_FPS)
            .clamp(MIN_FPS, MAX_FPS);

        let spawn_cooldown_ms = get("TWENTY48_SPAWN_COOLDOWN_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(SPAWN_COOLDOWN_MS);

        let log_path = get("TWENTY48_LOG_PATH");

        let log_level = get("TWENTY48_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            seed,
            fps,
            spawn_cooldown_ms,
            log_path,
            log_level,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(MIN_FPS)
    }

    /// Game rules for this run.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default().with_spawn_cooldown_ms(self.spawn_cooldown_ms)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
