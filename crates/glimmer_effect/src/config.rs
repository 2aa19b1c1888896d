//! Glimmer configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! duration_ms = 2000
//! peak_alpha = 0.25
//! ```
//!
//! Values are not validated; a zero duration or an out-of-range alpha is
//! rendered as given.

use std::fs;
use std::path::Path;

use glimmer_core::{BackgroundPosition, BackgroundSize, Color, LinearGradient};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Cycle duration used when none is given
pub const DEFAULT_DURATION_MS: i64 = 1500;

/// Appearance and timing of a glimmer effect
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlimmerConfig {
    /// Duration of one sweep cycle in milliseconds
    pub duration_ms: i64,
    /// Gradient direction in degrees (90 sweeps left to right)
    pub angle_deg: f32,
    /// Sheen color as 8-bit RGB
    pub tint: [u8; 3],
    /// Alpha at the center of the sheen
    pub peak_alpha: f32,
    /// Background offset at either end of the sweep, in percent
    pub sweep_percent: f32,
    /// Background width in percent of the element (height stays 100%)
    pub size_percent: f32,
}

impl Default for GlimmerConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            angle_deg: 90.0,
            tint: [255, 255, 255],
            peak_alpha: 0.4,
            sweep_percent: 200.0,
            size_percent: 200.0,
        }
    }
}

impl GlimmerConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub(crate) fn gradient(&self) -> LinearGradient {
        let [r, g, b] = self.tint;
        LinearGradient::sheen(Color::from_rgb8(r, g, b), self.peak_alpha, self.angle_deg)
    }

    pub(crate) fn background_size(&self) -> BackgroundSize {
        BackgroundSize::percent(self.size_percent, 100.0)
    }

    /// Background positions at 0% and 100% of the cycle
    pub(crate) fn sweep(&self) -> (BackgroundPosition, BackgroundPosition) {
        // Subtract instead of negating so a zero sweep stays +0 and renders "0%"
        (
            BackgroundPosition::horizontal_percent(0.0 - self.sweep_percent),
            BackgroundPosition::horizontal_percent(self.sweep_percent),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render_reference_values() {
        let config = GlimmerConfig::default();
        assert_eq!(
            config.gradient().to_css(),
            "linear-gradient(90deg, rgba(255,255,255,0) 0%, rgba(255,255,255,0.4) 50%, rgba(255,255,255,0) 100%)"
        );
        assert_eq!(config.background_size().to_css(), "200% 100%");

        let (from, to) = config.sweep();
        assert_eq!(from.to_css(), "-200% 0");
        assert_eq!(to.to_css(), "200% 0");
    }

    #[test]
    fn test_zero_sweep_renders_without_sign() {
        let config = GlimmerConfig {
            sweep_percent: 0.0,
            ..GlimmerConfig::default()
        };
        let (from, to) = config.sweep();
        assert_eq!(from.to_css(), "0% 0");
        assert_eq!(to.to_css(), "0% 0");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GlimmerConfig::from_toml_str("duration_ms = 2000\ntint = [255, 215, 0]").unwrap();
        assert_eq!(config.duration_ms, 2000);
        assert_eq!(config.tint, [255, 215, 0]);
        assert_eq!(config.peak_alpha, 0.4);
        assert_eq!(config.sweep_percent, 200.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GlimmerConfig::from_toml_str("").unwrap(), GlimmerConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = GlimmerConfig::from_toml_str("duration_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GlimmerConfig::load("/nonexistent/glimmer.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_serialize_round_trips_through_toml() {
        let config = GlimmerConfig {
            duration_ms: -5,
            ..GlimmerConfig::default()
        };
        let source = toml::to_string(&config).unwrap();
        assert_eq!(GlimmerConfig::from_toml_str(&source).unwrap(), config);
    }
}
