//! Chart typography configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Fonts shared by every chart
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Font family name as known to the system font database
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl ChartConfig {
    /// Validate chart configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.font_family.trim().is_empty() {
            return Err(ValidationError::MissingRequired("chart.font_family"));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 || self.font_size > 72.0 {
            return Err(ValidationError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}

fn default_font_family() -> String {
    "serif".to_string()
}

fn default_font_size() -> f64 {
    8.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_defaults() {
        let config = ChartConfig::default();
        assert_eq!(config.font_family, "serif");
        assert_eq!(config.font_size, 8.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_font() {
        let config = ChartConfig {
            font_family: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ChartConfig {
            font_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidFontSize(_))));
    }
}
