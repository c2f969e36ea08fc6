//! Tradespace Module - Pure domain services for cost/value analysis.
//!
//! # Components
//!
//! - `DesignPoint` - Cost, value and standard error of one design
//! - `ResultRecord` - A fully typed row of simulation output
//! - `DesignTags` / `Architecture` - Link flags decided once at ingestion
//! - `pareto_front` - Statistical non-dominance filter
//! - `ViewSpec` - Row selection and projection onto the cost/value plane
//! - `FrontierComparison` - Independent vs. centralized fronts
//! - `LinearFit` - Least-squares trend line
//!
//! All functions are pure and stateless; I/O lives behind the ports.

mod design_point;
mod frontier;
mod pareto;
mod record;
mod regression;
mod tags;
mod view;

pub use design_point::{DesignPoint, CONFIDENCE_Z};
pub use frontier::{
    linspace, Counterpart, Curve, FrontierComparison, FrontierSample, DEFAULT_SAMPLES,
};
pub use pareto::{dominated_by, pareto_front, strict_frontier, ParetoEntry, ParetoFront};
pub use record::ResultRecord;
pub use regression::LinearFit;
pub use tags::{Architecture, DesignTags, RunLabel};
pub use view::{LinkFilter, Normalization, ValueAxis, ViewFilter, ViewSpec};

#[cfg(test)]
pub(crate) use record::fixtures::record as record_fixture;
