//! Frontier comparison between independent and shared-link designs.
//!
//! The centralized (shared-link) front shows what players gain when the
//! federation works. Its "failure" twin replaces every centralized design
//! with the independent design that uses the same assets over proprietary
//! links, i.e. what the player is left with if sharing never happens.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::design_point::DesignPoint;
use super::pareto::pareto_front;
use super::record::ResultRecord;
use super::view::{ValueAxis, ViewSpec};
use crate::domain::foundation::{DesignId, ValidationError};

/// Default number of cost samples across the comparison range.
pub const DEFAULT_SAMPLES: usize = 50;

/// Piecewise-linear curve through points sorted by x.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<(f64, f64)>,
}

impl Curve {
    /// Builds a curve, sorting the points by x.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut points: Vec<(f64, f64)> = points.into_iter().collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest x.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.0, last.0))
    }

    /// Linear interpolation, clamped to the end values outside the range.
    ///
    /// Returns `None` for an empty curve.
    pub fn interpolate(&self, x: f64) -> Option<f64> {
        let (first, last) = (self.points.first()?, self.points.last()?);
        if x <= first.0 {
            return Some(first.1);
        }
        if x >= last.0 {
            return Some(last.1);
        }
        let upper = self.points.partition_point(|p| p.0 <= x);
        let (x0, y0) = self.points[upper - 1];
        let (x1, y1) = self.points[upper];
        if (x1 - x0).abs() < f64::EPSILON {
            return Some(y1);
        }
        Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// The three fronts evaluated at one cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierSample {
    pub cost: f64,
    pub independent: f64,
    pub centralized: f64,
    pub failure: Option<f64>,
}

/// A centralized front design and its proprietary-link twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterpart {
    pub centralized: DesignId,
    pub independent: DesignId,
}

/// Independent, centralized and failure fronts sampled over a common range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierComparison {
    pub independent: Curve,
    pub centralized: Curve,
    pub failure: Curve,
    pub counterparts: Vec<Counterpart>,
    pub samples: Vec<FrontierSample>,
}

impl FrontierComparison {
    /// Compares the strictly efficient fronts of two views.
    ///
    /// Returns `Ok(None)` if either view has no strictly efficient design.
    ///
    /// # Errors
    /// Propagates projection failures from either view.
    pub fn compute(
        records: &[ResultRecord],
        independent: &ViewSpec,
        centralized: &ViewSpec,
        axis: ValueAxis,
        sample_count: usize,
    ) -> Result<Option<Self>, ValidationError> {
        let ind_points = independent.project(records, axis)?;
        let cen_points = centralized.project(records, axis)?;

        let ind_front = pareto_front(&ind_points);
        let cen_front = pareto_front(&cen_points);
        let ind_curve = curve_of(ind_front.strictly_efficient());
        let cen_efficient = cen_front.strictly_efficient();
        let cen_curve = curve_of(cen_efficient.iter().copied());

        let (Some((ind_lo, ind_hi)), Some((cen_lo, cen_hi))) = (ind_curve.x_range(), cen_curve.x_range())
        else {
            return Ok(None);
        };

        let by_id: HashMap<DesignId, &ResultRecord> = records.iter().map(|r| (r.id, r)).collect();
        let ind_records = independent.select(records);
        let ind_values: HashMap<DesignId, f64> =
            ind_points.iter().map(|p| (p.id(), p.value())).collect();

        let mut counterparts = Vec::new();
        let mut failure_points = Vec::new();
        for point in &cen_efficient {
            let Some(query) = by_id
                .get(&point.id())
                .and_then(|r| r.run.first_player_segment())
                .map(|segment| segment.with_proprietary_links())
            else {
                continue;
            };
            let twin = ind_records
                .iter()
                .find(|r| r.run.contains(query.as_str()))
                .and_then(|r| ind_values.get(&r.id).map(|v| (r.id, *v)));
            if let Some((twin_id, value)) = twin {
                counterparts.push(Counterpart {
                    centralized: point.id(),
                    independent: twin_id,
                });
                failure_points.push((point.cost(), value));
            }
        }
        let failure = Curve::from_points(failure_points);

        let samples = linspace(ind_lo.max(cen_lo), ind_hi.max(cen_hi), sample_count)
            .into_iter()
            .filter_map(|cost| {
                Some(FrontierSample {
                    cost,
                    independent: ind_curve.interpolate(cost)?,
                    centralized: cen_curve.interpolate(cost)?,
                    failure: failure.interpolate(cost),
                })
            })
            .collect();

        Ok(Some(Self {
            independent: ind_curve,
            centralized: cen_curve,
            failure,
            counterparts,
            samples,
        }))
    }
}

fn curve_of<'a>(points: impl IntoIterator<Item = &'a DesignPoint>) -> Curve {
    Curve::from_points(points.into_iter().map(|p| (p.cost(), p.value())))
}
