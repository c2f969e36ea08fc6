//! Column layouts of the simulation result files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

/// Known result file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// Sixteen columns with per-player and per-run statistics.
    #[default]
    Experiment,
    /// Ten columns of single-player results.
    Summary,
}

impl LayoutPreset {
    pub fn layout(&self) -> ColumnLayout {
        match self {
            LayoutPreset::Experiment => ColumnLayout::experiment(),
            LayoutPreset::Summary => ColumnLayout::summary(),
        }
    }
}

/// Zero-based column index of every field.
///
/// Optional columns fall back as follows when absent: one player with index
/// zero, no satellites or stations, ISL decided from the run label, min and
/// max equal to the mean, and run totals equal to the row's own numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub run: usize,
    #[serde(default)]
    pub players: Option<usize>,
    #[serde(default)]
    pub player: Option<usize>,
    #[serde(default)]
    pub satellites: Option<usize>,
    #[serde(default)]
    pub stations: Option<usize>,
    #[serde(default)]
    pub isl: Option<usize>,
    pub cost: usize,
    #[serde(default)]
    pub min_value: Option<usize>,
    #[serde(default)]
    pub max_value: Option<usize>,
    pub exp_value: usize,
    pub std_err: usize,
    #[serde(default)]
    pub total_cost: Option<usize>,
    #[serde(default)]
    pub total_exp_value: Option<usize>,
    #[serde(default)]
    pub total_std_err: Option<usize>,
}

impl ColumnLayout {
    /// `Run, Players, Player, Satellites, Stations, ISL, Cost, Count, Min,
    /// Max, Avg, StdDev, StdErr, Total Cost, Total Value Avg, Total Value StdErr`
    pub fn experiment() -> Self {
        Self {
            run: 0,
            players: Some(1),
            player: Some(2),
            satellites: Some(3),
            stations: Some(4),
            isl: Some(5),
            cost: 6,
            min_value: Some(8),
            max_value: Some(9),
            exp_value: 10,
            std_err: 12,
            total_cost: Some(13),
            total_exp_value: Some(14),
            total_std_err: Some(15),
        }
    }

    /// `Run, Stations, ISL, Cost, Count, Min, Max, Avg, StdDev, StdErr`
    pub fn summary() -> Self {
        Self {
            run: 0,
            players: None,
            player: None,
            satellites: None,
            stations: Some(1),
            isl: Some(2),
            cost: 3,
            min_value: Some(5),
            max_value: Some(6),
            exp_value: 7,
            std_err: 9,
            total_cost: None,
            total_exp_value: None,
            total_std_err: None,
        }
    }

    /// Mapped fields with their column names, in file order.
    pub fn columns(&self) -> Vec<(&'static str, usize)> {
        let mut columns: Vec<(&'static str, usize)> = [
            ("Run", Some(self.run)),
            ("Players", self.players),
            ("Player", self.player),
            ("Satellites", self.satellites),
            ("Stations", self.stations),
            ("ISL", self.isl),
            ("Cost", Some(self.cost)),
            ("Min", self.min_value),
            ("Max", self.max_value),
            ("Avg", Some(self.exp_value)),
            ("StdErr", Some(self.std_err)),
            ("Total Cost", self.total_cost),
            ("Total Value Avg", self.total_exp_value),
            ("Total Value StdErr", self.total_std_err),
        ]
        .into_iter()
        .filter_map(|(name, index)| index.map(|i| (name, i)))
        .collect();
        columns.sort_by_key(|(_, i)| *i);
        columns
    }

    /// Number of columns a row needs.
    pub fn width(&self) -> usize {
        self.columns().iter().map(|(_, i)| i + 1).max().unwrap_or(0)
    }

    /// # Errors
    /// `InvalidFormat` if two fields share a column or the run totals are
    /// only partly mapped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen: HashMap<usize, &str> = HashMap::new();
        for (name, index) in self.columns() {
            if let Some(other) = seen.insert(index, name) {
                return Err(ValidationError::invalid_format(
                    "input.columns",
                    format!("{} and {} both map to column {}", other, name, index),
                ));
            }
        }
        let totals = [self.total_cost, self.total_exp_value, self.total_std_err];
        let mapped = totals.iter().filter(|t| t.is_some()).count();
        if mapped != 0 && mapped != totals.len() {
            return Err(ValidationError::invalid_format(
                "input.columns",
                "total cost, value and std error must be mapped together",
            ));
        }
        Ok(())
    }

    pub fn has_totals(&self) -> bool {
        self.total_cost.is_some()
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::experiment()
    }
}
