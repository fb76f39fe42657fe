//! Application configuration
//!
//! Re-exports the shared types from picklens-types and adds persistence on
//! top. The overlay core itself only ever reads these values; writing is
//! reserved for the host's settings UI.

pub use picklens_types::{AppConfig, Color, GridCalibration, InGameOverlaySettings, badge_colors};

use super::error::ConfigError;

const APP_NAME: &str = "picklens";
const CONFIG_NAME: &str = "config";

/// Extension trait for AppConfig persistence and validation
pub trait AppConfigExt: Sized {
    /// Load from the platform config directory, falling back to defaults.
    fn load() -> Self;

    fn save(&self) -> Result<(), ConfigError>;

    /// Validate once after loading; invalid calibration falls back to the
    /// defaults rather than poisoning the layout.
    fn validated(self) -> Self;
}

impl AppConfigExt for AppConfig {
    fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME)
            .unwrap_or_default()
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn validated(mut self) -> Self {
        if let Err(reason) = self.overlay.grid.validate() {
            tracing::warn!(reason, "Invalid grid calibration, using defaults");
            self.overlay.grid = GridCalibration::default();
        }
        self
    }
}
