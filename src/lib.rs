//! FSS Tradespace - Pareto analysis of federated satellite system designs
//!
//! This crate reads simulation results, filters each design family down to
//! its statistically non-dominated designs and draws tradespace and frontier
//! comparison charts for the built-in or configured experiment plans.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
