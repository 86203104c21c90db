//! Engine tuning.
//!
//! Defaults come from the constants in `tui_blockfall_types`. A config can be
//! read from JSON; every field is optional.
//!
//! ```
//! use tui_blockfall_core::EngineConfig;
//!
//! let cfg = EngineConfig::from_json_str(r#"{ "base_drop_ms": 1000, "seed": 7 }"#).unwrap();
//! assert_eq!(cfg.base_drop_ms, 1000);
//! assert_eq!(cfg.width, 10);
//! assert_eq!(cfg.seed, Some(7));
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::{
    BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, DROP_DECAY, LINES_PER_LEVEL, MIN_DROP_MS, SPAWN_X,
    SPAWN_Y,
};

/// Largest supported board edge. Keeps every coordinate inside `i8`.
pub const MAX_BOARD_EDGE: u8 = 64;

/// Smallest supported board edge. A 4x4 box must fit.
pub const MIN_BOARD_EDGE: u8 = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    pub spawn_x: i8,
    pub spawn_y: i8,
    pub base_drop_ms: u32,
    pub min_drop_ms: u32,
    pub drop_decay: f64,
    pub lines_per_level: u32,
    /// Randomizer seed. `None` lets the driver pick one.
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            base_drop_ms: BASE_DROP_MS,
            min_drop_ms: MIN_DROP_MS,
            drop_decay: DROP_DECAY,
            lines_per_level: LINES_PER_LEVEL,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, edge) in [("width", self.width), ("height", self.height)] {
            if !(MIN_BOARD_EDGE..=MAX_BOARD_EDGE).contains(&edge) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be within {MIN_BOARD_EDGE}..={MAX_BOARD_EDGE}, got {edge}"),
                ));
            }
        }

        // The 3x3 rotation box has to start inside the board.
        let max_spawn_x = self.width as i8 - 3;
        if !(0..=max_spawn_x).contains(&self.spawn_x) {
            return Err(ConfigError::invalid(
                "spawn_x",
                format!("must be within 0..={max_spawn_x}, got {}", self.spawn_x),
            ));
        }
        if !(-4..=0).contains(&self.spawn_y) {
            return Err(ConfigError::invalid(
                "spawn_y",
                format!("must be within -4..=0, got {}", self.spawn_y),
            ));
        }

        if self.min_drop_ms == 0 {
            return Err(ConfigError::invalid("min_drop_ms", "must be positive"));
        }
        if self.base_drop_ms < self.min_drop_ms {
            return Err(ConfigError::invalid(
                "base_drop_ms",
                format!(
                    "must be at least min_drop_ms ({}), got {}",
                    self.min_drop_ms, self.base_drop_ms
                ),
            ));
        }
        if !(self.drop_decay > 0.0 && self.drop_decay <= 1.0) {
            return Err(ConfigError::invalid(
                "drop_decay",
                format!("must be within (0, 1], got {}", self.drop_decay),
            ));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::invalid("lines_per_level", "must be positive"));
        }

        Ok(())
    }
}
