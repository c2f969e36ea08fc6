//! Design Point - one configuration's cost/value/uncertainty.

use serde::{Deserialize, Serialize};

use super::tags::DesignTags;
use crate::domain::foundation::{DesignId, ValidationError};

/// Two-sided 95% normal-approximation multiplier for standard errors.
pub const CONFIDENCE_Z: f64 = 1.96;

/// A design projected onto the cost/value plane.
///
/// Constructed only through [`DesignPoint::new`], which enforces
/// `cost >= 0`, `std_err >= 0` and finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignPoint {
    id: DesignId,
    cost: f64,
    value: f64,
    std_err: f64,
    tags: DesignTags,
}

impl DesignPoint {
    /// Creates a design point.
    ///
    /// # Errors
    /// - `NotFinite` if any number is NaN or infinite
    /// - `Negative` if `cost` or `std_err` is below zero
    pub fn new(
        id: DesignId,
        cost: f64,
        value: f64,
        std_err: f64,
        tags: DesignTags,
    ) -> Result<Self, ValidationError> {
        for (field, x) in [("cost", cost), ("value", value), ("std_err", std_err)] {
            if !x.is_finite() {
                return Err(ValidationError::not_finite(field));
            }
        }
        if cost < 0.0 {
            return Err(ValidationError::negative("cost", cost));
        }
        if std_err < 0.0 {
            return Err(ValidationError::negative("std_err", std_err));
        }
        Ok(Self {
            id,
            cost,
            value,
            std_err,
            tags,
        })
    }

    /// Creates an untagged design point.
    pub fn untagged(id: DesignId, cost: f64, value: f64, std_err: f64) -> Result<Self, ValidationError> {
        Self::new(id, cost, value, std_err, DesignTags::default())
    }

    pub fn id(&self) -> DesignId {
        self.id
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn std_err(&self) -> f64 {
        self.std_err
    }

    pub fn tags(&self) -> &DesignTags {
        &self.tags
    }

    /// Half-width of the 95% confidence interval on `value`.
    pub fn margin(&self) -> f64 {
        CONFIDENCE_Z * self.std_err
    }

    pub fn lower_bound(&self) -> f64 {
        self.value - self.margin()
    }

    pub fn upper_bound(&self) -> f64 {
        self.value + self.margin()
    }

    /// A new point whose value is net of its cost.
    pub fn net_of_cost(&self) -> Self {
        Self {
            value: self.value - self.cost,
            ..self.clone()
        }
    }

    /// True if `self` is no more expensive than `other` and strictly more valuable.
    pub fn strictly_dominates(&self, other: &DesignPoint) -> bool {
        self.cost <= other.cost && self.value > other.value
    }

    /// True if `self` is no more expensive than `other` and its confidence
    /// interval lies entirely above `other`'s.
    pub fn statistically_dominates(&self, other: &DesignPoint) -> bool {
        self.cost <= other.cost && self.lower_bound() > other.upper_bound()
    }
}
