//! Layout configuration: every tunable default in one serde value.

use crate::canvas::CanvasSizing;
use crate::drag::DragState;
use crate::geometry::CLICK_THRESHOLD;
use crate::grid::GridConfig;
use crate::scroll::{AutoScroll, auto_scroll_velocity};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Layout tuning. Missing fields fall back to their defaults, so a config
/// file only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub grid: GridConfig,
    pub canvas: CanvasSizing,
    pub auto_scroll: AutoScroll,
    pub click_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            canvas: CanvasSizing::default(),
            auto_scroll: AutoScroll::default(),
            click_threshold: CLICK_THRESHOLD,
        }
    }
}

impl LayoutConfig {
    /// Parse from JSON.
    ///
    /// Suspicious values (non-positive or shrinking grid sizes, a zero scroll
    /// threshold) are accepted as-is and only logged.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.warn_if_suspicious();
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json).map_err(|e| match e {
            ConfigError::Parse(msg) => {
                ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })?;
        log::debug!("Loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Idle drag tracker using the configured click threshold.
    pub fn drag_state(&self) -> DragState {
        DragState::with_click_threshold(self.click_threshold)
    }

    /// Edge auto-scroll velocity for a pointer inside `viewport`.
    pub fn scroll_velocity(&self, pointer: Point, viewport: Rect) -> Vec2 {
        auto_scroll_velocity(pointer, viewport, &self.auto_scroll)
    }

    fn warn_if_suspicious(&self) {
        if !self.grid.is_well_formed() {
            log::warn!(
                "Grid sizes should be positive and non-decreasing, got {:?}",
                self.grid
            );
        }
        if self.auto_scroll.threshold <= 0.0 {
            log::warn!(
                "Auto-scroll threshold {} disables edge scrolling",
                self.auto_scroll.threshold
            );
        }
    }
}
