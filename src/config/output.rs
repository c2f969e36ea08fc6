//! Output configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;
use super::ChartConfig;
use crate::adapters::chart::{ImageFormat, RenderSettings};

/// Largest image edge accepted, in pixels
const MAX_PIXELS: f64 = 20_000.0;

/// Where images are written and how large they are
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving every image
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Image format (`png` or `svg`)
    #[serde(default)]
    pub format: ImageFormat,

    /// Dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Width in inches
    #[serde(default = "default_width")]
    pub width_in: f64,

    /// Height in inches
    #[serde(default = "default_height")]
    pub height_in: f64,
}

impl OutputConfig {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renderer settings combining size and typography.
    pub fn render_settings(&self, chart: &ChartConfig) -> RenderSettings {
        RenderSettings {
            format: self.format,
            dpi: self.dpi,
            width_in: self.width_in,
            height_in: self.height_in,
            font_family: chart.font_family.clone(),
            font_size: chart.font_size,
        }
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dpi == 0 || self.dpi > 1200 {
            return Err(ValidationError::InvalidDpi(self.dpi));
        }
        let dpi = f64::from(self.dpi);
        let valid_edge = |inches: f64| inches.is_finite() && inches > 0.0 && inches * dpi <= MAX_PIXELS;
        if !valid_edge(self.width_in) || !valid_edge(self.height_in) {
            return Err(ValidationError::InvalidImageSize {
                width_in: self.width_in,
                height_in: self.height_in,
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            format: ImageFormat::default(),
            dpi: default_dpi(),
            width_in: default_width(),
            height_in: default_height(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_dpi() -> u32 {
    300
}

fn default_width() -> f64 {
    6.5
}

fn default_height() -> f64 {
    3.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.dir, PathBuf::from("."));
        assert_eq!(config.format, ImageFormat::Png);
        assert_eq!(config.dpi, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_dpi() {
        let config = OutputConfig {
            dpi: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidDpi(0))));
    }

    #[test]
    fn test_validation_invalid_size() {
        let config = OutputConfig {
            width_in: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = OutputConfig {
            width_in: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_render_settings_carry_typography() {
        let chart = ChartConfig {
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
        };
        let settings = OutputConfig::default().render_settings(&chart);
        assert_eq!(settings.font_family, "sans-serif");
        assert_eq!(settings.pixel_size(), (1950, 1050));
    }
}
