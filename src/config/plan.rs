//! Plan selection configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::chart::ChartOptions;
use crate::domain::experiment::{ComparisonSpec, ExperimentPlan};
use crate::domain::tradespace::{ValueAxis, ViewSpec};

/// Which experiment plan to run
///
/// With an empty `views` list, `name` selects a built-in plan. Otherwise the
/// plan is defined entirely here and `name` only labels the run.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub value_axis: ValueAxis,

    #[serde(default)]
    pub chart: ChartOptions,

    #[serde(default)]
    pub views: Vec<ViewSpec>,

    #[serde(default)]
    pub comparisons: Vec<ComparisonSpec>,
}

impl PlanConfig {
    /// Builds and validates the plan to run.
    pub fn resolve(&self) -> Result<ExperimentPlan, ValidationError> {
        let plan = if self.views.is_empty() {
            ExperimentPlan::preset(&self.name).ok_or_else(|| ValidationError::UnknownPlan {
                name: self.name.clone(),
                known: ExperimentPlan::PRESETS.join(", "),
            })?
        } else {
            ExperimentPlan {
                name: self.name.clone(),
                value_axis: self.value_axis,
                chart: self.chart.clone(),
                views: self.views.clone(),
                comparisons: self.comparisons.clone(),
            }
        };
        plan.validate()
            .map_err(|e| ValidationError::InvalidPlan(e.to_string()))?;
        Ok(plan)
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            value_axis: ValueAxis::default(),
            chart: ChartOptions::default(),
            views: Vec::new(),
            comparisons: Vec::new(),
        }
    }
}

fn default_name() -> String {
    "exp7".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tradespace::{Normalization, ViewFilter};

    #[test]
    fn test_default_plan_is_exp7() {
        let plan = PlanConfig::default().resolve().unwrap();
        assert_eq!(plan.name, "exp7");
        assert_eq!(plan.comparisons.len(), 1);
    }

    #[test]
    fn test_unknown_preset() {
        let config = PlanConfig {
            name: "exp4".to_string(),
            ..Default::default()
        };
        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("exp3, exp5, exp7, summary"));
    }

    #[test]
    fn test_custom_views_define_the_plan() {
        let config = PlanConfig {
            name: "custom".to_string(),
            value_axis: ValueAxis::Net,
            views: vec![ViewSpec::new("all", ViewFilter::default(), Normalization::Own)],
            ..Default::default()
        };
        let plan = config.resolve().unwrap();
        assert_eq!(plan.views.len(), 1);
        assert_eq!(plan.value_axis, ValueAxis::Net);
    }

    #[test]
    fn test_invalid_custom_plan() {
        let config = PlanConfig {
            views: vec![ViewSpec::new("a/b", ViewFilter::default(), Normalization::Own)],
            ..Default::default()
        };
        assert!(matches!(config.resolve(), Err(ValidationError::InvalidPlan(_))));
    }
}
