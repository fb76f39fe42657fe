//! Shared configuration types for Picklens
//!
//! This crate contains the serializable configuration types consumed by
//! picklens-core. Everything here is plain data: the core reads these values
//! but never mutates persisted configuration on its own.

use serde::{Deserialize, Serialize};

/// RGBA color as `[r, g, b, a]`
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Badge Color Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Badge palette for the in-game rating overlay.
///
/// Background/foreground pairs per rating bracket, plus the gold pair that is
/// reserved for the best-in-pack highlight.
pub mod badge_colors {
    use super::Color;

    pub const BEST_BG: Color = [255, 215, 0, 255]; // Gold
    pub const BEST_FG: Color = [0, 0, 0, 255];

    pub const TIER_90_BG: Color = [255, 69, 0, 255]; // Flame red
    pub const TIER_75_BG: Color = [34, 170, 34, 255]; // Green
    pub const TIER_65_BG: Color = [51, 153, 221, 255]; // Bright blue
    pub const TIER_58_BG: Color = [85, 119, 170, 255]; // Steel blue
    pub const TIER_52_BG: Color = [119, 136, 153, 255]; // Slate
    pub const TIER_45_BG: Color = [136, 136, 136, 255]; // Gray
    pub const TIER_30_BG: Color = [170, 68, 68, 255]; // Dark red

    pub const FLOOR_BG: Color = [85, 51, 51, 255];
    pub const FLOOR_FG: Color = [153, 136, 136, 255];

    pub const WHITE: Color = [255, 255, 255, 255];
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_grid_left() -> f64 {
    0.16
}
fn default_grid_right() -> f64 {
    0.826
}
fn default_grid_top() -> f64 {
    0.32
}
fn default_grid_bottom() -> f64 {
    0.654
}

// ─────────────────────────────────────────────────────────────────────────────
// Grid Calibration
// ─────────────────────────────────────────────────────────────────────────────

/// Fractional offsets of the draft card grid inside the game client area.
///
/// Each value is a fraction of the client width (left/right) or height
/// (top/bottom). The defaults were measured against the stock Arena draft
/// screen; every field can be overridden independently in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCalibration {
    #[serde(default = "default_grid_left")]
    pub left: f64,
    #[serde(default = "default_grid_right")]
    pub right: f64,
    #[serde(default = "default_grid_top")]
    pub top: f64,
    #[serde(default = "default_grid_bottom")]
    pub bottom: f64,
}

impl Default for GridCalibration {
    fn default() -> Self {
        Self {
            left: default_grid_left(),
            right: default_grid_right(),
            top: default_grid_top(),
            bottom: default_grid_bottom(),
        }
    }
}

impl GridCalibration {
    /// Build a calibration, validating the fractions once up front.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, &'static str> {
        let calib = Self {
            left,
            right,
            top,
            bottom,
        };
        calib.validate()?;
        Ok(calib)
    }

    /// Check that all fractions are in [0, 1] and the edges are ordered.
    pub fn validate(&self) -> Result<(), &'static str> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if ![self.left, self.right, self.top, self.bottom]
            .iter()
            .all(|&v| in_unit(v))
        {
            return Err("calibration fractions must be within [0, 1]");
        }
        if self.left >= self.right {
            return Err("grid left edge must be less than right edge");
        }
        if self.top >= self.bottom {
            return Err("grid top edge must be less than bottom edge");
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-Game Overlay Settings
// ─────────────────────────────────────────────────────────────────────────────

/// User-facing settings for the in-game rating badge overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InGameOverlaySettings {
    /// Master switch; disabling hides all badges on the next poll tick
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Append `[index:name]` to each badge label for calibration work
    #[serde(default)]
    pub debug_labels: bool,
    #[serde(default)]
    pub grid: GridCalibration,
}

impl Default for InGameOverlaySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debug_labels: false,
            grid: GridCalibration::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub overlay: InGameOverlaySettings,
    /// Explicit model root override; when unset the engine probes the
    /// platform data directory and then the bundled `models/` tree
    #[serde(default)]
    pub model_directory: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calibration_is_valid() {
        assert!(GridCalibration::default().validate().is_ok());
    }

    #[test]
    fn calibration_rejects_inverted_edges() {
        assert!(GridCalibration::new(0.8, 0.2, 0.3, 0.6).is_err());
        assert!(GridCalibration::new(0.1, 0.9, 0.7, 0.3).is_err());
    }

    #[test]
    fn calibration_rejects_out_of_range_fractions() {
        assert!(GridCalibration::new(-0.1, 0.8, 0.3, 0.6).is_err());
        assert!(GridCalibration::new(0.1, 1.2, 0.3, 0.6).is_err());
    }

    #[test]
    fn overlay_enabled_by_default() {
        let settings = InGameOverlaySettings::default();
        assert!(settings.enabled);
        assert!(!settings.debug_labels);
    }
}
