//! RunExperimentHandler - Reads one result file and renders every chart of a plan.
//!
//! Ingestion completes before anything is drawn, so a malformed row aborts
//! the run without leaving partial output behind.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::domain::experiment::ExperimentPlan;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ChartRenderer, ResultsReader};

use super::compare_frontiers::{CompareFrontiersCommand, CompareFrontiersHandler, CompareFrontiersResult};
use super::render_tradespace::{RenderTradespaceCommand, RenderTradespaceHandler, RenderTradespaceResult};

/// Command to run a whole plan.
#[derive(Debug, Clone)]
pub struct RunExperimentCommand {
    pub plan: ExperimentPlan,
    pub output_dir: PathBuf,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub plan: String,
    pub records_read: usize,
    pub views: Vec<RenderTradespaceResult>,
    pub comparisons: Vec<CompareFrontiersResult>,
    pub written: Vec<PathBuf>,
    pub generated_at: DateTime<Utc>,
}

impl ExperimentReport {
    /// Views that produced no image.
    pub fn skipped_views(&self) -> impl Iterator<Item = &str> {
        self.views.iter().filter(|v| v.path.is_none()).map(|v| v.label.as_str())
    }
}

/// Handler driving a full plan.
pub struct RunExperimentHandler {
    reader: Arc<dyn ResultsReader>,
    tradespaces: RenderTradespaceHandler,
    comparisons: CompareFrontiersHandler,
}

impl RunExperimentHandler {
    pub fn new(reader: Arc<dyn ResultsReader>, renderer: Arc<dyn ChartRenderer>) -> Self {
        Self {
            reader,
            tradespaces: RenderTradespaceHandler::new(renderer.clone()),
            comparisons: CompareFrontiersHandler::new(renderer),
        }
    }

    pub fn handle(&self, cmd: RunExperimentCommand) -> Result<ExperimentReport, DomainError> {
        let plan = cmd.plan;

        // 1. Check the plan before touching the input
        plan.validate()?;

        // 2. Read every record; any malformed row aborts here
        let records = self.reader.read_records()?;
        info!(plan = %plan.name, records = records.len(), "Loaded results");

        // 3. Resolve comparisons up front so a bad reference draws nothing
        let mut comparison_cmds = Vec::with_capacity(plan.comparisons.len());
        for spec in &plan.comparisons {
            let independent = plan
                .view(&spec.independent)
                .ok_or_else(|| unknown_view(&spec.label, &spec.independent))?;
            let centralized = plan
                .view(&spec.centralized)
                .ok_or_else(|| unknown_view(&spec.label, &spec.centralized))?;
            comparison_cmds.push(CompareFrontiersCommand {
                label: spec.label.clone(),
                independent: independent.clone(),
                centralized: centralized.clone(),
                value_axis: plan.value_axis,
                samples: spec.samples,
                axes: spec.axes.clone(),
                output_dir: cmd.output_dir.clone(),
            });
        }

        // 4. One tradespace per view
        let mut views = Vec::with_capacity(plan.views.len());
        for view in &plan.views {
            let result = self.tradespaces.handle(
                &records,
                RenderTradespaceCommand {
                    view: view.clone(),
                    value_axis: plan.value_axis,
                    options: plan.chart.clone(),
                    output_dir: cmd.output_dir.clone(),
                },
            )?;
            views.push(result);
        }

        // 5. Frontier comparisons
        let mut comparisons = Vec::with_capacity(comparison_cmds.len());
        for comparison in comparison_cmds {
            comparisons.push(self.comparisons.handle(&records, comparison)?);
        }

        let written: Vec<PathBuf> = views
            .iter()
            .filter_map(|v| v.path.clone())
            .chain(comparisons.iter().filter_map(|c| c.path.clone()))
            .collect();
        info!(plan = %plan.name, files = written.len(), "Experiment complete");

        Ok(ExperimentReport {
            plan: plan.name,
            records_read: records.len(),
            views,
            comparisons,
            written,
            generated_at: Utc::now(),
        })
    }
}

fn unknown_view(comparison: &str, view: &str) -> DomainError {
    DomainError::new(
        ErrorCode::ValidationFailed,
        format!("Comparison '{}' refers to unknown view '{}'", comparison, view),
    )
    .with_detail("view", view)
}
