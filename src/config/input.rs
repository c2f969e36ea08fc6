//! Input configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::tabular::{ColumnLayout, LayoutPreset};

/// Where results are read from and how their columns are laid out
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Results file
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Preset column layout; the plan decides when unset
    pub layout: Option<LayoutPreset>,

    /// Explicit column indices, overriding `layout`
    pub columns: Option<ColumnLayout>,
}

impl InputConfig {
    /// Column layout to read with.
    ///
    /// Explicit columns win, then the configured preset. Otherwise the
    /// `summary` plan reads the summary layout and every other plan the
    /// experiment layout.
    pub fn column_layout(&self, plan_name: &str) -> ColumnLayout {
        if let Some(columns) = &self.columns {
            return columns.clone();
        }
        let preset = self.layout.unwrap_or(if plan_name == "summary" {
            LayoutPreset::Summary
        } else {
            LayoutPreset::Experiment
        });
        preset.layout()
    }

    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("input.path"));
        }
        if let Some(columns) = &self.columns {
            columns
                .validate()
                .map_err(|e| ValidationError::InvalidColumns(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            layout: None,
            columns: None,
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("results.csv")
}
