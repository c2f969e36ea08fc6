//! RenderTradespaceHandler - Draws the tradespace scatter of one view.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::chart::{ChartOptions, TradespaceChart};
use crate::domain::foundation::DomainError;
use crate::domain::tradespace::{pareto_front, ResultRecord, ValueAxis, ViewSpec};
use crate::ports::ChartRenderer;

/// Command to render one view.
#[derive(Debug, Clone)]
pub struct RenderTradespaceCommand {
    pub view: ViewSpec,
    pub value_axis: ValueAxis,
    pub options: ChartOptions,
    pub output_dir: PathBuf,
}

/// Outcome of rendering one view.
///
/// `path` is `None` when the view had nothing to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTradespaceResult {
    pub label: String,
    pub points: usize,
    pub front_size: usize,
    pub strictly_efficient: usize,
    pub labelled: usize,
    pub path: Option<PathBuf>,
}

/// Handler for tradespace charts.
pub struct RenderTradespaceHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl RenderTradespaceHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(
        &self,
        records: &[ResultRecord],
        cmd: RenderTradespaceCommand,
    ) -> Result<RenderTradespaceResult, DomainError> {
        let label = cmd.view.label.clone();

        // 1. Project the view onto the cost/value plane
        let points = cmd.view.project(records, cmd.value_axis)?;

        // 2. Filter
        let front = pareto_front(&points);
        let strictly_efficient = front.strictly_efficient().len();
        debug!(
            view = %label,
            points = points.len(),
            front = front.len(),
            strictly_efficient,
            "Filtered view"
        );

        let mut result = RenderTradespaceResult {
            label: label.clone(),
            points: points.len(),
            front_size: front.len(),
            strictly_efficient,
            labelled: 0,
            path: None,
        };

        // 3. Lay out the chart; a view without plotted points is skipped
        let chart = TradespaceChart::build(label.as_str(), &points, &cmd.options);
        if chart.is_empty() {
            warn!(view = %label, "View has no points to plot, skipping");
            return Ok(result);
        }
        result.labelled = chart.labels.len();

        // 4. Render
        let path = tradespace_file(&cmd.output_dir, &label, self.renderer.extension());
        self.renderer.render_tradespace(&chart, &path)?;
        info!(view = %label, path = %path.display(), "Wrote tradespace chart");

        result.path = Some(path);
        Ok(result)
    }
}

/// `<dir>/<label>-exp-ts.<ext>`
pub fn tradespace_file(dir: &Path, label: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}-exp-ts.{}", label, extension))
}
