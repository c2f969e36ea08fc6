//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! configuration file and environment variables using the `config` and
//! `dotenvy` crates. Environment variables use the `FSS_TRADESPACE` prefix
//! and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fss_tradespace::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! let plan = config.validate().expect("Invalid configuration");
//!
//! println!("Running plan {} on {}", plan.name, config.input.path.display());
//! ```

mod chart;
mod error;
mod input;
mod logging;
mod output;
mod plan;

pub use chart::ChartConfig;
pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use plan::PlanConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::experiment::ExperimentPlan;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FSS_TRADESPACE";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration for the `exp7` plan reading `results.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Results file and column layout
    #[serde(default)]
    pub input: InputConfig,

    /// Output directory, format and image size
    #[serde(default)]
    pub output: OutputConfig,

    /// Chart typography
    #[serde(default)]
    pub chart: ChartConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Plan selection or definition
    #[serde(default)]
    pub plan: PlanConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `FSS_TRADESPACE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FSS_TRADESPACE__OUTPUT__DPI=150` -> `output.dpi = 150`
    /// - `FSS_TRADESPACE__PLAN__NAME=exp3` -> `plan.name = "exp3"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Load configuration from a TOML, YAML or JSON file
    ///
    /// Environment variables still override values from the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(Some(path))
    }

    fn build(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values and resolve the plan
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<ExperimentPlan, ValidationError> {
        self.input.validate()?;
        self.output.validate()?;
        self.chart.validate()?;
        self.plan.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::chart::ImageFormat;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "FSS_TRADESPACE__INPUT__PATH",
        "FSS_TRADESPACE__OUTPUT__DPI",
        "FSS_TRADESPACE__OUTPUT__FORMAT",
        "FSS_TRADESPACE__PLAN__NAME",
        "FSS_TRADESPACE__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.input.path, Path::new("results.csv"));
        assert_eq!(config.output.dpi, 300);
        assert_eq!(config.plan.name, "exp7");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FSS_TRADESPACE__INPUT__PATH", "/data/exp3.csv");
        env::set_var("FSS_TRADESPACE__OUTPUT__DPI", "150");
        env::set_var("FSS_TRADESPACE__OUTPUT__FORMAT", "svg");
        env::set_var("FSS_TRADESPACE__PLAN__NAME", "exp3");
        env::set_var("FSS_TRADESPACE__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.input.path, Path::new("/data/exp3.csv"));
        assert_eq!(config.output.dpi, 150);
        assert_eq!(config.output.format, ImageFormat::Svg);
        assert!(config.logging.json);
        assert_eq!(config.validate().unwrap().name, "exp3");
    }

    #[test]
    fn test_load_from_file_with_custom_plan() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[input]
path = "runs/data.csv"
layout = "summary"

[output]
dir = "figures"
width_in = 6.0
height_in = 3.0

[plan]
name = "stations"
value_axis = "net"

[plan.chart]
scheme = "isl"
labels = "strict_within_series"

[[plan.views]]
label = "one-station"
filter = {{ stations = 1 }}

[[plan.views]]
label = "two-stations"
filter = {{ stations = 2 }}
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        let plan = config.validate().unwrap();

        assert_eq!(config.output.dir, Path::new("figures"));
        assert_eq!(plan.name, "stations");
        assert_eq!(plan.views.len(), 2);
        assert_eq!(plan.views[1].filter.stations, Some(2));
        assert_eq!(
            config.input.column_layout(&plan.name),
            crate::adapters::tabular::ColumnLayout::summary()
        );
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\ndpi = 600").unwrap();
        env::set_var("FSS_TRADESPACE__OUTPUT__DPI", "72");
        let result = AppConfig::load_from(file.path());
        clear_env();

        assert_eq!(result.unwrap().output.dpi, 72);
    }

    #[test]
    fn test_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load_from(Path::new("/nonexistent/fss.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validation_rejects_unknown_plan() {
        let config = AppConfig {
            plan: PlanConfig {
                name: "exp9".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::UnknownPlan { .. })));
    }
}
