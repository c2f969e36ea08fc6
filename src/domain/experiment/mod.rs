//! Experiment Module - Plans describing which charts a run produces.
//!
//! A plan is a list of views sharing one set of chart options, plus any
//! frontier comparisons between pairs of those views. Plans are either
//! built in (`exp3`, `exp5`, `exp7`, `summary`) or read from configuration.

mod plan;
mod presets;

pub use plan::{ComparisonSpec, ExperimentPlan};
