//! Views - record selection and projection onto the cost/value plane.

use serde::{Deserialize, Serialize};

use super::design_point::DesignPoint;
use super::record::ResultRecord;
use crate::domain::foundation::ValidationError;

/// Link ownership used to split designs into independent and shared groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkFilter {
    /// Neither open ISL nor open SGL.
    Independent,
    /// At least one open link.
    Shared,
}

/// Conjunctive row predicate. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFilter {
    pub players: Option<u32>,
    pub player: Option<u32>,
    pub satellites: Option<u32>,
    pub stations: Option<u32>,
    pub isl: Option<bool>,
    pub links: Option<LinkFilter>,
}

impl ViewFilter {
    pub fn matches(&self, record: &ResultRecord) -> bool {
        self.players.map_or(true, |n| record.players == n)
            && self.player.map_or(true, |p| record.player == p)
            && self.satellites.map_or(true, |s| record.satellites == s)
            && self.stations.map_or(true, |s| record.stations == s)
            && self.isl.map_or(true, |isl| record.tags.isl == isl)
            && self.links.map_or(true, |links| match links {
                LinkFilter::Independent => !record.tags.is_shared(),
                LinkFilter::Shared => record.tags.is_shared(),
            })
    }
}

/// Which cost/value columns a view reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// The row's own player statistics.
    #[default]
    Own,
    /// Run totals divided by the number of players.
    PerPlayer,
}

/// Quantity plotted on the value axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueAxis {
    #[default]
    Expected,
    /// Expected value minus cost.
    Net,
}

/// A named selection of records rendered as one tradespace chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSpec {
    pub label: String,
    #[serde(default)]
    pub filter: ViewFilter,
    #[serde(default)]
    pub normalization: Normalization,
}

impl ViewSpec {
    pub fn new(label: impl Into<String>, filter: ViewFilter, normalization: Normalization) -> Self {
        Self {
            label: label.into(),
            filter,
            normalization,
        }
    }

    /// Records matching this view, in input order.
    pub fn select<'a>(&self, records: &'a [ResultRecord]) -> Vec<&'a ResultRecord> {
        records.iter().filter(|r| self.filter.matches(r)).collect()
    }

    /// Projects the matching records to design points.
    ///
    /// # Errors
    /// Propagates a `ValidationError` if a projected point is invalid.
    pub fn project(
        &self,
        records: &[ResultRecord],
        axis: ValueAxis,
    ) -> Result<Vec<DesignPoint>, ValidationError> {
        self.select(records)
            .into_iter()
            .map(|r| {
                let point = match self.normalization {
                    Normalization::Own => r.own_point()?,
                    Normalization::PerPlayer => r.per_player_point()?,
                };
                Ok(match axis {
                    ValueAxis::Expected => point,
                    ValueAxis::Net => point.net_of_cost(),
                })
            })
            .collect()
    }
}
