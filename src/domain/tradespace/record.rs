//! Result Record - one fully typed row of simulation output.

use serde::{Deserialize, Serialize};

use super::design_point::DesignPoint;
use super::tags::{DesignTags, RunLabel};
use crate::domain::foundation::{DesignId, ValidationError};

/// Aggregated statistics for one player of one simulated design.
///
/// Values with a `total_` prefix are summed over every player of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: DesignId,
    pub run: RunLabel,
    pub players: u32,
    /// Zero-based index of the player this row describes.
    pub player: u32,
    pub satellites: u32,
    pub stations: u32,
    pub tags: DesignTags,
    pub cost: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub exp_value: f64,
    pub std_err: f64,
    pub total_cost: f64,
    pub total_exp_value: f64,
    pub total_std_err: f64,
}

impl ResultRecord {
    /// Checks the invariants every ingested row must satisfy.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.players == 0 {
            return Err(ValidationError::invalid_format("players", "must be at least 1"));
        }
        if self.player >= self.players {
            return Err(ValidationError::invalid_format(
                "player",
                format!("index {} out of range for {} players", self.player, self.players),
            ));
        }
        let numbers = [
            ("cost", self.cost),
            ("min_value", self.min_value),
            ("max_value", self.max_value),
            ("exp_value", self.exp_value),
            ("std_err", self.std_err),
            ("total_cost", self.total_cost),
            ("total_exp_value", self.total_exp_value),
            ("total_std_err", self.total_std_err),
        ];
        for (field, x) in numbers {
            if !x.is_finite() {
                return Err(ValidationError::not_finite(field));
            }
        }
        for (field, x) in [
            ("cost", self.cost),
            ("std_err", self.std_err),
            ("total_cost", self.total_cost),
            ("total_std_err", self.total_std_err),
        ] {
            if x < 0.0 {
                return Err(ValidationError::negative(field, x));
            }
        }
        Ok(())
    }

    /// This player's own cost and value.
    pub fn own_point(&self) -> Result<DesignPoint, ValidationError> {
        DesignPoint::new(self.id, self.cost, self.exp_value, self.std_err, self.tags)
    }

    /// The run's totals divided evenly among its players.
    pub fn per_player_point(&self) -> Result<DesignPoint, ValidationError> {
        let n = f64::from(self.players.max(1));
        DesignPoint::new(
            self.id,
            self.total_cost / n,
            self.total_exp_value / n,
            self.total_std_err / n,
            self.tags,
        )
    }
}
