//! Series schemes - how designs are grouped and colored on a chart.

use serde::{Deserialize, Serialize};

use crate::domain::tradespace::{Architecture, DesignTags};

/// Semantic palette; renderers map these to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesColor {
    Black,
    Blue,
    Green,
    Red,
    Magenta,
    Yellow,
    Grey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Legend entry of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub label: String,
    pub color: SeriesColor,
}

impl SeriesGroup {
    fn new(label: &str, color: SeriesColor) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }
}

/// Grouping of designs into colored series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesScheme {
    /// Everything in one black series.
    #[default]
    Single,
    /// Split on the presence of any inter-satellite link.
    Isl,
    /// Split on ISL presence and open ground links.
    IslAndGround,
    /// One series per link architecture.
    Architecture,
}

impl SeriesScheme {
    /// Series in legend order.
    pub fn groups(&self) -> Vec<SeriesGroup> {
        use SeriesColor::*;
        match self {
            SeriesScheme::Single => vec![SeriesGroup::new("Designs", Black)],
            SeriesScheme::Isl => vec![
                SeriesGroup::new("Without ISL", Black),
                SeriesGroup::new("With ISL", Blue),
            ],
            SeriesScheme::IslAndGround => vec![
                SeriesGroup::new("pSGL", Black),
                SeriesGroup::new("pSGL and ISL", Blue),
                SeriesGroup::new("oSGL", Red),
                SeriesGroup::new("oSGL and ISL", Green),
            ],
            SeriesScheme::Architecture => {
                let colors = [Black, Blue, Green, Red, Magenta, Yellow];
                Architecture::ALL
                    .iter()
                    .zip(colors)
                    .map(|(arch, color)| SeriesGroup::new(arch.label(), color))
                    .collect()
            }
        }
    }

    /// Index into [`groups`](Self::groups) for a design, if it belongs to one.
    pub fn group_of(&self, tags: &DesignTags) -> Option<usize> {
        match self {
            SeriesScheme::Single => Some(0),
            SeriesScheme::Isl => Some(usize::from(tags.isl)),
            SeriesScheme::IslAndGround => Some(match (tags.osgl, tags.isl) {
                (false, false) => 0,
                (false, true) => 1,
                (true, false) => 2,
                (true, true) => 3,
            }),
            SeriesScheme::Architecture => {
                let arch = tags.architecture()?;
                Architecture::ALL.iter().position(|a| *a == arch)
            }
        }
    }
}
