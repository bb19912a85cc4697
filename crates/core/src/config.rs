//! Engine configuration
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```
//! use tick_tetris_core::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{ "speed": { "base_interval": 60 } }"#).unwrap();
//! assert_eq!(config.speed.base_interval, 60);
//! assert_eq!(config.board_width, 10);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::{ScoringRules, SpeedCurve};
use crate::shapes::{self, CATALOG};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM, SPAWN_X, SPAWN_Y};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("board {width}x{height} outside the supported {min}..={max} range")]
    BoardSize {
        width: u8,
        height: u8,
        min: u8,
        max: u8,
    },

    #[error("spawn pivot ({x}, {y}) does not fit every piece on an empty board")]
    SpawnOutOfBounds { x: i8, y: i8 },

    #[error("min_interval must be at least 1 tick")]
    ZeroFallInterval,

    #[error("points_per_level must be at least 1")]
    ZeroPointsPerLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_width: u8,
    pub board_height: u8,
    pub spawn_x: i8,
    pub spawn_y: i8,
    pub scoring: ScoringRules,
    pub speed: SpeedCurve,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            scoring: ScoringRules::default(),
            speed: SpeedCurve::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = MIN_BOARD_DIM..=MAX_BOARD_DIM;
        if !dims.contains(&self.board_width) || !dims.contains(&self.board_height) {
            return Err(ConfigError::BoardSize {
                width: self.board_width,
                height: self.board_height,
                min: MIN_BOARD_DIM,
                max: MAX_BOARD_DIM,
            });
        }

        if !self.spawn_fits_every_piece() {
            return Err(ConfigError::SpawnOutOfBounds {
                x: self.spawn_x,
                y: self.spawn_y,
            });
        }

        if self.speed.min_interval == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }

        if self.scoring.points_per_level == 0 {
            return Err(ConfigError::ZeroPointsPerLevel);
        }

        Ok(())
    }

    fn spawn_fits_every_piece(&self) -> bool {
        let (w, h) = (self.board_width as i16, self.board_height as i16);
        let (sx, sy) = (self.spawn_x as i16, self.spawn_y as i16);
        CATALOG.iter().all(|def| {
            (0..def.rotation_count).all(|r| {
                shapes::cells(def.kind, r).iter().all(|&(dx, dy)| {
                    let (x, y) = (sx + dx as i16, sy + dy as i16);
                    (0..w).contains(&x) && (0..h).contains(&y)
                })
            })
        })
    }
}
