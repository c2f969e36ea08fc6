//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod tradespace;

pub use tradespace::{
    comparison_file, tradespace_file, CompareFrontiersCommand, CompareFrontiersHandler,
    CompareFrontiersResult, ExperimentReport, RenderTradespaceCommand, RenderTradespaceHandler,
    RenderTradespaceResult, RunExperimentCommand, RunExperimentHandler,
};
