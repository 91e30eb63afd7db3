//! Editor configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

/// Tunables for an editing session.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum distance, in canvas units, at which a dragged item still
    /// snaps. Default: **1.0**.
    pub snap_threshold: f32,

    /// Height of a newly added item as a fraction of the canvas height.
    /// Width follows the image's aspect ratio. Default: **0.25**.
    pub item_height_ratio: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_threshold: 1.0,
            item_height_ratio: 0.25,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Malformed JSON, or a field outside its valid range.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// `snap_threshold` negative or not finite; `item_height_ratio` not in (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            return Err(ConfigError::Invalid {
                field: "snap_threshold",
                reason: format!("expected a finite value >= 0, got {}", self.snap_threshold),
            });
        }
        if !(self.item_height_ratio > 0.0 && self.item_height_ratio <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "item_height_ratio",
                reason: format!("expected a value in (0, 1], got {}", self.item_height_ratio),
            });
        }
        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
