//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `tradespace` - Design points, Pareto filter, views and frontier comparison
//! - `chart` - Renderer-independent chart models
//! - `experiment` - Plans naming the views and comparisons of a run

pub mod chart;
pub mod experiment;
pub mod foundation;
pub mod tradespace;
