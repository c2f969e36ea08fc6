//! Pareto Filter - statistical non-dominance over cost and value.
//!
//! A design survives the filter when its value is positive and no other
//! design is both no more expensive and significantly better at 95%
//! confidence. Each survivor also records whether it is strictly efficient,
//! i.e. not beaten on value by any design that is no more expensive.
//!
//! # Algorithm
//!
//! Points are visited in cost order while tracking the running maximum of
//! `value - 1.96 * std_err` and of `value`. Equal-cost points form one
//! group that is folded in before any member is judged, so ties count as
//! "no more expensive". A point never beats itself under either test, which
//! lets the running maxima include it without special casing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::design_point::DesignPoint;
use crate::domain::foundation::DesignId;

/// A surviving design and its strict-efficiency flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoEntry {
    pub point: DesignPoint,
    pub strictly_efficient: bool,
}

/// Survivors of the Pareto filter, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParetoFront {
    entries: Vec<ParetoEntry>,
}

impl ParetoFront {
    pub fn entries(&self) -> &[ParetoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: DesignId) -> bool {
        self.entries.iter().any(|e| e.point.id() == id)
    }

    /// Surviving points in input order.
    pub fn points(&self) -> Vec<DesignPoint> {
        self.entries.iter().map(|e| e.point.clone()).collect()
    }

    pub fn ids(&self) -> Vec<DesignId> {
        self.entries.iter().map(|e| e.point.id()).collect()
    }

    pub fn costs(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.point.cost()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.point.value()).collect()
    }

    pub fn strict_flags(&self) -> Vec<bool> {
        self.entries.iter().map(|e| e.strictly_efficient).collect()
    }

    /// Strictly efficient survivors ordered by cost, ready to draw as a line.
    pub fn strictly_efficient(&self) -> Vec<&DesignPoint> {
        let mut points: Vec<&DesignPoint> = self
            .entries
            .iter()
            .filter(|e| e.strictly_efficient)
            .map(|e| &e.point)
            .collect();
        points.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
        points
    }
}

/// Filters `points` down to their statistical Pareto front.
///
/// # Edge Cases
/// - Empty input: returns an empty front
/// - `value <= 0`: never survives
/// - Equal costs: the better point may exclude the other
pub fn pareto_front(points: &[DesignPoint]) -> ParetoFront {
    let best_lower = cost_prefix_maxima(points, DesignPoint::lower_bound);
    let best_value = cost_prefix_maxima(points, DesignPoint::value);

    let entries = points
        .iter()
        .enumerate()
        .filter(|(i, p)| p.value() > 0.0 && best_lower[*i] <= p.upper_bound())
        .map(|(i, p)| ParetoEntry {
            point: p.clone(),
            strictly_efficient: best_value[i] <= p.value(),
        })
        .collect();

    ParetoFront { entries }
}

/// Points that no other point strictly dominates, in input order.
///
/// Unlike [`pareto_front`] there is no positivity requirement and no
/// confidence margin.
pub fn strict_frontier(points: &[DesignPoint]) -> Vec<&DesignPoint> {
    let best_value = cost_prefix_maxima(points, DesignPoint::value);
    points
        .iter()
        .enumerate()
        .filter(|(i, p)| best_value[*i] <= p.value())
        .map(|(_, p)| p)
        .collect()
}

/// First point that statistically dominates `points[index]`, if any.
///
/// Quadratic when called for every point; meant for diagnostics.
pub fn dominated_by(points: &[DesignPoint], index: usize) -> Option<&DesignPoint> {
    let candidate = points.get(index)?;
    points
        .iter()
        .enumerate()
        .find(|(j, other)| *j != index && other.statistically_dominates(candidate))
        .map(|(_, other)| other)
}

/// For each point, the maximum of `key` over all points costing no more.
fn cost_prefix_maxima(points: &[DesignPoint], key: impl Fn(&DesignPoint) -> f64) -> Vec<f64> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a]
            .cost()
            .partial_cmp(&points[b].cost())
            .unwrap_or(Ordering::Equal)
    });

    let mut maxima = vec![f64::NEG_INFINITY; points.len()];
    let mut running = f64::NEG_INFINITY;
    let mut start = 0;
    while start < order.len() {
        let cost = points[order[start]].cost();
        let mut end = start;
        while end < order.len() && points[order[end]].cost() == cost {
            running = running.max(key(&points[order[end]]));
            end += 1;
        }
        for &idx in &order[start..end] {
            maxima[idx] = running;
        }
        start = end;
    }
    maxima
}
