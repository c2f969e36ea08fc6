//! Tradespace handlers.
//!
//! - `RenderTradespaceHandler` - one scatter per view
//! - `CompareFrontiersHandler` - independent vs. centralized fronts
//! - `RunExperimentHandler` - a whole plan from one input file

mod compare_frontiers;
mod render_tradespace;
mod run_experiment;

pub use compare_frontiers::{
    comparison_file, CompareFrontiersCommand, CompareFrontiersHandler, CompareFrontiersResult,
};
pub use render_tradespace::{
    tradespace_file, RenderTradespaceCommand, RenderTradespaceHandler, RenderTradespaceResult,
};
pub use run_experiment::{ExperimentReport, RunExperimentCommand, RunExperimentHandler};
