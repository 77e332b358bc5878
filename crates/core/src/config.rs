//! Game configuration - grid size, shape rules, level speed and key bindings
//!
//! The configuration is read from JSON with camelCase keys:
//!
//! ```json
//! {
//!   "cols": 14, "rows": 20,
//!   "shapeTypeCount": 10,
//!   "minShapeSize": 3, "maxShapeSize": 4,
//!   "minBlocksPerShape": 3, "maxBlocksPerShape": 7,
//!   "linesPerLevel": 5,
//!   "speedTable": [{ "level": 1, "speed": 800 }],
//!   "keys": { "left": "ArrowLeft", "right": "ArrowRight", "softDrop": "ArrowDown",
//!             "rotate": "ArrowUp", "hardDrop": "Space", "hold": "KeyC" }
//! }
//! ```
//!
//! Missing keys take their default. [`GameConfig::validate`] is the settings
//! boundary: the engine itself trusts whatever config it is handed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    DEFAULT_TICK_MS, MAX_LINES_PER_LEVEL, MAX_SHAPE_TYPES, MIN_COLS, MIN_LINES_PER_LEVEL,
    MIN_ROWS, MIN_SHAPE_SIZE,
};

/// Gravity interval for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedEntry {
    pub level: u32,
    /// Milliseconds between gravity ticks
    pub speed: u32,
}

/// Key code per logical action, as DOM-style key codes (`ArrowLeft`, `KeyC`, `Space`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub soft_drop: String,
    pub rotate: String,
    pub hard_drop: String,
    pub hold: String,
}

impl KeyBindings {
    /// Bindings as `(name, code)` pairs in a fixed order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("left", self.left.as_str()),
            ("right", self.right.as_str()),
            ("softDrop", self.soft_drop.as_str()),
            ("rotate", self.rotate.as_str()),
            ("hardDrop", self.hard_drop.as_str()),
            ("hold", self.hold.as_str()),
        ]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            soft_drop: "ArrowDown".to_string(),
            rotate: "ArrowUp".to_string(),
            hard_drop: "Space".to_string(),
            hold: "KeyC".to_string(),
        }
    }
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    /// Number of shape prototypes generated per game
    pub shape_type_count: usize,
    /// Bounding box edge range (N of N×N)
    pub min_shape_size: usize,
    pub max_shape_size: usize,
    /// Filled cell range per shape
    pub min_blocks_per_shape: usize,
    pub max_blocks_per_shape: usize,
    pub lines_per_level: u32,
    pub speed_table: Vec<SpeedEntry>,
    pub keys: KeyBindings,
}

/// Default gravity intervals for levels 1..=20
pub const DEFAULT_SPEEDS_MS: [u32; 20] = [
    800, 700, 600, 500, 430, 380, 340, 300, 260, 230, 200, 180, 160, 140, 120, 110, 100, 90, 80,
    70,
];

/// Default speed table (levels 1..=20)
pub fn default_speed_table() -> Vec<SpeedEntry> {
    DEFAULT_SPEEDS_MS
        .iter()
        .zip(1u32..)
        .map(|(&speed, level)| SpeedEntry { level, speed })
        .collect()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 14,
            rows: 20,
            shape_type_count: 10,
            min_shape_size: 3,
            max_shape_size: 4,
            min_blocks_per_shape: 3,
            max_blocks_per_shape: 7,
            lines_per_level: 5,
            speed_table: default_speed_table(),
            keys: KeyBindings::default(),
        }
    }
}

/// Configuration rejected at the settings boundary
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cols must be at least 6, got {0}")]
    TooFewCols(usize),
    #[error("rows must be at least 10, got {0}")]
    TooFewRows(usize),
    #[error("shapeTypeCount must be within 1..=50, got {0}")]
    ShapeTypeCount(usize),
    #[error("minShapeSize must be at least 2, got {0}")]
    MinShapeSize(usize),
    #[error("maxShapeSize ({max}) is smaller than minShapeSize ({min})")]
    ShapeSizeRange { min: usize, max: usize },
    #[error("minBlocksPerShape must be at least 1")]
    MinBlocks,
    #[error("maxBlocksPerShape ({max}) is smaller than minBlocksPerShape ({min})")]
    BlockRange { min: usize, max: usize },
    #[error("maxBlocksPerShape ({max}) exceeds maxShapeSize² ({limit})")]
    TooManyBlocks { max: usize, limit: usize },
    #[error("linesPerLevel must be within 1..=20, got {0}")]
    LinesPerLevel(u32),
    #[error("speedTable must not be empty")]
    EmptySpeedTable,
    #[error("speedTable entry for level {0} has a zero interval")]
    ZeroSpeed(u32),
    #[error("key binding `{0}` is empty")]
    EmptyKey(&'static str),
    #[error("key `{code}` is bound to both `{first}` and `{second}`")]
    DuplicateKey {
        code: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Check every range and consistency rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < MIN_COLS {
            return Err(ConfigError::TooFewCols(self.cols));
        }
        if self.rows < MIN_ROWS {
            return Err(ConfigError::TooFewRows(self.rows));
        }
        if !(1..=MAX_SHAPE_TYPES).contains(&self.shape_type_count) {
            return Err(ConfigError::ShapeTypeCount(self.shape_type_count));
        }
        if self.min_shape_size < MIN_SHAPE_SIZE {
            return Err(ConfigError::MinShapeSize(self.min_shape_size));
        }
        if self.max_shape_size < self.min_shape_size {
            return Err(ConfigError::ShapeSizeRange {
                min: self.min_shape_size,
                max: self.max_shape_size,
            });
        }
        if self.min_blocks_per_shape < 1 {
            return Err(ConfigError::MinBlocks);
        }
        if self.max_blocks_per_shape < self.min_blocks_per_shape {
            return Err(ConfigError::BlockRange {
                min: self.min_blocks_per_shape,
                max: self.max_blocks_per_shape,
            });
        }
        let limit = self.max_shape_size.saturating_mul(self.max_shape_size);
        if self.max_blocks_per_shape > limit {
            return Err(ConfigError::TooManyBlocks {
                max: self.max_blocks_per_shape,
                limit,
            });
        }
        if !(MIN_LINES_PER_LEVEL..=MAX_LINES_PER_LEVEL).contains(&self.lines_per_level) {
            return Err(ConfigError::LinesPerLevel(self.lines_per_level));
        }
        if self.speed_table.is_empty() {
            return Err(ConfigError::EmptySpeedTable);
        }
        if let Some(entry) = self.speed_table.iter().find(|e| e.speed == 0) {
            return Err(ConfigError::ZeroSpeed(entry.level));
        }
        self.validate_keys()
    }

    fn validate_keys(&self) -> Result<(), ConfigError> {
        let entries = self.keys.entries();
        for (i, &(name, code)) in entries.iter().enumerate() {
            if code.trim().is_empty() {
                return Err(ConfigError::EmptyKey(name));
            }
            if let Some(&(first, _)) = entries[..i].iter().find(|(_, other)| *other == code) {
                return Err(ConfigError::DuplicateKey {
                    code: code.to_string(),
                    first,
                    second: name,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON for this configuration.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Gravity interval for `level`.
    ///
    /// Uses the entry whose level matches exactly, otherwise the last entry of
    /// the table, so levels past the table keep its final speed.
    pub fn tick_interval_ms(&self, level: u32) -> u32 {
        self.speed_table
            .iter()
            .find(|e| e.level == level)
            .or_else(|| self.speed_table.last())
            .map_or(DEFAULT_TICK_MS, |e| e.speed)
    }
}
