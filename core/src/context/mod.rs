//! Configuration context

mod config;
mod error;

pub use config::{AppConfigExt, badge_colors};
pub use error::ConfigError;
pub use picklens_types::{AppConfig, Color, GridCalibration, InGameOverlaySettings};
