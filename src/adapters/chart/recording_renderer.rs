//! Recording renderer for tests.
//!
//! Captures every chart model with its target path instead of drawing it,
//! so handler tests can assert on what would have been written.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::chart::{FrontierChart, TradespaceChart};
use crate::ports::{ChartRenderer, RenderError};

/// A chart captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedChart {
    Tradespace(TradespaceChart),
    Frontier(FrontierChart),
}

/// Renderer that keeps charts in memory.
///
/// Follows the port contract on empty charts so handlers see the same
/// errors they would from a real backend.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    rendered: RefCell<Vec<(PathBuf, RecordedChart)>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Paths in render order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.rendered.borrow().iter().map(|(p, _)| p.clone()).collect()
    }

    /// Captured tradespace charts in render order.
    pub fn tradespaces(&self) -> Vec<TradespaceChart> {
        self.rendered
            .borrow()
            .iter()
            .filter_map(|(_, c)| match c {
                RecordedChart::Tradespace(chart) => Some(chart.clone()),
                RecordedChart::Frontier(_) => None,
            })
            .collect()
    }

    /// Captured frontier charts in render order.
    pub fn frontiers(&self) -> Vec<FrontierChart> {
        self.rendered
            .borrow()
            .iter()
            .filter_map(|(_, c)| match c {
                RecordedChart::Frontier(chart) => Some(chart.clone()),
                RecordedChart::Tradespace(_) => None,
            })
            .collect()
    }

    pub fn render_count(&self) -> usize {
        self.rendered.borrow().len()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_tradespace(&self, chart: &TradespaceChart, path: &Path) -> Result<(), RenderError> {
        if chart.is_empty() {
            return Err(RenderError::empty_chart(chart.title.clone()));
        }
        self.rendered
            .borrow_mut()
            .push((path.to_path_buf(), RecordedChart::Tradespace(chart.clone())));
        Ok(())
    }

    fn render_frontier(&self, chart: &FrontierChart, path: &Path) -> Result<(), RenderError> {
        self.rendered
            .borrow_mut()
            .push((path.to_path_buf(), RecordedChart::Frontier(chart.clone())));
        Ok(())
    }

    fn extension(&self) -> &str {
        "png"
    }
}
