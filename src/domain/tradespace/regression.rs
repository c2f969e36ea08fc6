//! Least-squares trend line through a tradespace.

use serde::{Deserialize, Serialize};

use super::design_point::DesignPoint;

/// `value ≈ slope * cost + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; 1.0 when every point lies on the line.
    pub r_squared: f64,
}

impl LinearFit {
    /// Ordinary least squares of value on cost.
    ///
    /// Returns `None` with fewer than two points or when every point has the
    /// same cost.
    pub fn least_squares(points: &[DesignPoint]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.cost()).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.value()).sum::<f64>() / n;

        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for p in points {
            let dx = p.cost() - mean_x;
            let dy = p.value() - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }
        if sxx <= f64::EPSILON {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let r_squared = if syy <= f64::EPSILON {
            1.0
        } else {
            (sxy * sxy) / (sxx * syy)
        };
        Some(Self {
            slope,
            intercept,
            r_squared,
        })
    }

    pub fn predict(&self, cost: f64) -> f64 {
        self.slope * cost + self.intercept
    }
}
