//! CompareFrontiersHandler - Draws independent vs. centralized fronts.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::chart::{Axes, FrontierChart};
use crate::domain::foundation::DomainError;
use crate::domain::tradespace::{FrontierComparison, ResultRecord, ValueAxis, ViewSpec};
use crate::ports::ChartRenderer;

/// Command to compare the fronts of two views.
#[derive(Debug, Clone)]
pub struct CompareFrontiersCommand {
    pub label: String,
    pub independent: ViewSpec,
    pub centralized: ViewSpec,
    pub value_axis: ValueAxis,
    pub samples: usize,
    pub axes: Axes,
    pub output_dir: PathBuf,
}

/// Outcome of one comparison. `path` is `None` when a side had no front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareFrontiersResult {
    pub label: String,
    pub independent_front: usize,
    pub centralized_front: usize,
    pub counterparts: usize,
    pub path: Option<PathBuf>,
}

pub struct CompareFrontiersHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl CompareFrontiersHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(
        &self,
        records: &[ResultRecord],
        cmd: CompareFrontiersCommand,
    ) -> Result<CompareFrontiersResult, DomainError> {
        if cmd.samples < 2 {
            return Err(DomainError::validation(
                "samples",
                format!("Comparison '{}' needs at least 2 samples", cmd.label),
            ));
        }

        // 1. Compute both fronts and the failure counterparts
        let comparison = FrontierComparison::compute(
            records,
            &cmd.independent,
            &cmd.centralized,
            cmd.value_axis,
            cmd.samples,
        )?;
        let Some(comparison) = comparison else {
            warn!(
                comparison = %cmd.label,
                independent = %cmd.independent.label,
                centralized = %cmd.centralized.label,
                "A side of the comparison has no efficient designs, skipping"
            );
            return Ok(CompareFrontiersResult {
                label: cmd.label,
                independent_front: 0,
                centralized_front: 0,
                counterparts: 0,
                path: None,
            });
        };
        debug!(
            comparison = %cmd.label,
            independent = comparison.independent.points().len(),
            centralized = comparison.centralized.points().len(),
            counterparts = comparison.counterparts.len(),
            "Compared fronts"
        );

        // 2. Lay out and render
        let chart = FrontierChart::build(cmd.label.as_str(), &comparison, cmd.axes);
        let path = comparison_file(&cmd.output_dir, &cmd.label, self.renderer.extension());
        self.renderer.render_frontier(&chart, &path)?;
        info!(comparison = %cmd.label, path = %path.display(), "Wrote frontier comparison");

        Ok(CompareFrontiersResult {
            label: cmd.label,
            independent_front: comparison.independent.points().len(),
            centralized_front: comparison.centralized.points().len(),
            counterparts: comparison.counterparts.len(),
            path: Some(path),
        })
    }
}

/// `<dir>/<label>.<ext>`
pub fn comparison_file(dir: &Path, label: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", label, extension))
}
