//! Experiment plans - which views to draw and how.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::chart::{Axes, ChartOptions};
use crate::domain::foundation::ValidationError;
use crate::domain::tradespace::{ValueAxis, ViewSpec, DEFAULT_SAMPLES};

use super::presets;

/// A frontier comparison between two views of the same plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSpec {
    /// File stem of the comparison image.
    pub label: String,
    /// Label of the view holding independent designs.
    pub independent: String,
    /// Label of the view holding shared-link designs.
    pub centralized: String,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default)]
    pub axes: Axes,
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

/// Named set of views rendered from one input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentPlan {
    pub name: String,
    #[serde(default)]
    pub value_axis: ValueAxis,
    #[serde(default)]
    pub chart: ChartOptions,
    pub views: Vec<ViewSpec>,
    #[serde(default)]
    pub comparisons: Vec<ComparisonSpec>,
}

impl ExperimentPlan {
    /// Names accepted by [`ExperimentPlan::preset`].
    pub const PRESETS: [&'static str; 4] = ["exp3", "exp5", "exp7", "summary"];

    /// Built-in plan by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "exp3" => Some(presets::exp3()),
            "exp5" => Some(presets::exp5()),
            "exp7" => Some(presets::exp7()),
            "summary" => Some(presets::summary()),
            _ => None,
        }
    }

    pub fn view(&self, label: &str) -> Option<&ViewSpec> {
        self.views.iter().find(|v| v.label == label)
    }

    /// Checks that labels are usable file stems and comparisons resolve.
    ///
    /// # Errors
    /// - `EmptyField` for a blank name or label, or a plan without views
    /// - `InvalidFormat` for duplicate or path-like labels, unknown view
    ///   references, too few samples, a bad marker alpha or an axis range
    ///   whose `min` is not below its `max`
    /// - `NotFinite` for an axis bound that is NaN or infinite
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("plan.name"));
        }
        if self.views.is_empty() {
            return Err(ValidationError::empty_field("plan.views"));
        }

        let mut seen = HashSet::new();
        let labels = self
            .views
            .iter()
            .map(|v| v.label.as_str())
            .chain(self.comparisons.iter().map(|c| c.label.as_str()));
        for label in labels {
            check_label(label)?;
            if !seen.insert(label) {
                return Err(ValidationError::invalid_format(
                    "plan.views.label",
                    format!("duplicate label '{}'", label),
                ));
            }
        }

        for cmp in &self.comparisons {
            for referenced in [&cmp.independent, &cmp.centralized] {
                if self.view(referenced).is_none() {
                    return Err(ValidationError::invalid_format(
                        "plan.comparisons",
                        format!("'{}' refers to unknown view '{}'", cmp.label, referenced),
                    ));
                }
            }
            cmp.axes.validate("plan.comparisons.axes")?;
            if cmp.samples < 2 {
                return Err(ValidationError::invalid_format(
                    "plan.comparisons.samples",
                    format!("'{}' needs at least 2 samples", cmp.label),
                ));
            }
        }

        self.chart.axes.validate("plan.chart.axes")?;

        if let Some(alpha) = self.chart.marker_alpha {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ValidationError::invalid_format(
                    "plan.chart.marker_alpha",
                    format!("{} is outside 0..=1", alpha),
                ));
            }
        }
        Ok(())
    }
}

fn check_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::empty_field("plan.views.label"));
    }
    if label.contains(['/', '\\']) || label == "." || label == ".." {
        return Err(ValidationError::invalid_format(
            "plan.views.label",
            format!("'{}' is not a valid file name", label),
        ));
    }
    Ok(())
}
