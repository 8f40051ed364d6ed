//! Runtime configuration read from `BLOCKFALL_*` environment variables.
//!
//! Missing or unparsable values fall back to the defaults; range problems are
//! reported by [`GameConfig::validate`].

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use crate::core::{Board, Session, ShapeCatalog, UniformRandom};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_FALL_MS, MAX_BOARD_DIM, MIN_BOARD_DIM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Gravity interval in milliseconds.
    pub fall_ms: u32,
    pub seed: u32,
    pub shapes: ShapeCatalog,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            fall_ms: DEFAULT_FALL_MS,
            seed: 1,
            shapes: ShapeCatalog::default(),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            width: parse_var(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.width),
            height: parse_var(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.height),
            fall_ms: parse_var(&lookup, "BLOCKFALL_FALL_MS").unwrap_or(defaults.fall_ms),
            seed: parse_var(&lookup, "BLOCKFALL_SEED").unwrap_or_else(clock_seed),
            shapes: lookup("BLOCKFALL_SHAPES")
                .and_then(|s| ShapeCatalog::from_str(s.trim()))
                .unwrap_or(defaults.shapes),
            log_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let range = MIN_BOARD_DIM..=MAX_BOARD_DIM;
        if !range.contains(&self.width) {
            bail!(
                "BLOCKFALL_WIDTH={} outside {}..={}",
                self.width,
                MIN_BOARD_DIM,
                MAX_BOARD_DIM
            );
        }
        if !range.contains(&self.height) {
            bail!(
                "BLOCKFALL_HEIGHT={} outside {}..={}",
                self.height,
                MIN_BOARD_DIM,
                MAX_BOARD_DIM
            );
        }
        if self.fall_ms == 0 {
            bail!("BLOCKFALL_FALL_MS must be greater than zero");
        }
        Ok(())
    }

    /// Fresh session for this config. Call [`GameConfig::validate`] first;
    /// out-of-range dimensions panic in `Board::new`.
    pub fn build_session(&self) -> Session {
        Session::with_options(
            Board::new(self.width, self.height),
            self.shapes,
            Box::new(UniformRandom::new(self.seed)),
        )
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
