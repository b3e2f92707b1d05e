//! Game configuration
//!
//! Runtime configuration with JSON persistence. Missing or unreadable
//! config files are logged and fall back to defaults; an explicit load
//! surfaces the error for callers that care.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::Color;
use crate::consts::{DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};

/// Errors from config persistence
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}

/// Top-level game configuration
///
/// Dimensions are floats so a config file can express any logical size;
/// negative values are rejected when the game is constructed, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical playfield width
    pub width: f32,
    /// Logical playfield height
    pub height: f32,
    /// Window/surface title
    pub title: String,
    /// Target frames per second; 0 disables pacing entirely
    pub fps: u32,
    /// Background clear color, applied once per frame before entity draws
    pub background: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            fps: DEFAULT_FPS,
            background: Color::BLACK,
        }
    }
}

impl GameConfig {
    /// Target frame interval, `None` when pacing is disabled
    pub fn frame_interval(&self) -> Option<std::time::Duration> {
        (self.fps > 0).then(|| std::time::Duration::from_secs_f64(1.0 / self.fps as f64))
    }

    /// Read a config file, surfacing I/O and parse errors
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Read a config file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("using default config ({}): {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
