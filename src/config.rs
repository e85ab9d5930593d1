//! Runtime configuration for the terminal game.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{BASE_TICK_MS, BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_SIDE, MIN_TICK_MS};

/// Smallest board that still fits every template in every rotation
pub const MIN_BOARD_SIDE: u8 = MAX_SHAPE_SIDE as u8;
/// Largest board side the engine addresses with signed 8-bit coordinates
pub const MAX_BOARD_SIDE: u8 = 127;
/// Upper bound for the starting step interval
pub const MAX_BASE_TICK_MS: u32 = 5_000;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for the first game
    pub seed: u32,
    pub width: u8,
    pub height: u8,
    /// Step interval before any rows are cleared
    pub base_tick_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_tick_ms: BASE_TICK_MS,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// `CASCADE_SEED`, `CASCADE_WIDTH`, `CASCADE_HEIGHT`, `CASCADE_BASE_TICK_MS`.
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
            raw.and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();

        let seed = parse(lookup("CASCADE_SEED")).unwrap_or(defaults.seed);
        let width = parse::<u32>(lookup("CASCADE_WIDTH"))
            .map(clamp_side)
            .unwrap_or(defaults.width);
        let height = parse::<u32>(lookup("CASCADE_HEIGHT"))
            .map(clamp_side)
            .unwrap_or(defaults.height);
        let base_tick_ms = parse::<u32>(lookup("CASCADE_BASE_TICK_MS"))
            .map(|ms| ms.clamp(MIN_TICK_MS, MAX_BASE_TICK_MS))
            .unwrap_or(defaults.base_tick_ms);

        Self {
            seed,
            width,
            height,
            base_tick_ms,
        }
    }
}

fn clamp_side(v: u32) -> u8 {
    v.clamp(MIN_BOARD_SIDE as u32, MAX_BOARD_SIDE as u32) as u8
}

/// Seed derived from the wall clock, never zero
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1);
    nanos.max(1)
}
