//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid dpi {0} (expected 1..=1200)")]
    InvalidDpi(u32),

    #[error("Invalid image size {width_in}x{height_in} in")]
    InvalidImageSize { width_in: f64, height_in: f64 },

    #[error("Invalid font size {0}")]
    InvalidFontSize(f64),

    #[error("Invalid column layout: {0}")]
    InvalidColumns(String),

    #[error("Unknown plan '{name}' (built-in plans: {known})")]
    UnknownPlan { name: String, known: String },

    #[error("Invalid plan: {0}")]
    InvalidPlan(String),
}
