//! Frontier comparison chart model.

use serde::{Deserialize, Serialize};

use super::series::{LineStyle, SeriesColor};
use super::tradespace_chart::{AxisRange, Axes, Polyline};
use crate::domain::tradespace::FrontierComparison;

pub const UPSIDE_NOTE: &str = "Upside Potential of FSS Success";
pub const DOWNSIDE_NOTE: &str = "Downside Risk of FSS Failure";

/// Front drawn as a legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontLine {
    pub label: String,
    pub line: Polyline,
}

/// Region between two sampled curves, drawn as a translucent fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// `(cost, lower, upper)` per sample.
    pub samples: Vec<(f64, f64, f64)>,
    pub color: SeriesColor,
}

/// Free text placed in data coordinates, optionally with an arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNote {
    pub text: String,
    pub at: (f64, f64),
    pub arrow_to: Option<(f64, f64)>,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierChart {
    pub title: String,
    pub axes: Axes,
    pub fronts: Vec<FrontLine>,
    pub bands: Vec<Band>,
    pub notes: Vec<TextNote>,
}

impl FrontierChart {
    pub fn build(title: impl Into<String>, comparison: &FrontierComparison, axes: Axes) -> Self {
        let mut fronts = vec![
            front(
                "Independent Pareto Front",
                comparison.independent.points(),
                SeriesColor::Black,
                LineStyle::Solid,
            ),
            front(
                "Centralized Pareto Front (FSS Success)",
                comparison.centralized.points(),
                SeriesColor::Black,
                LineStyle::Dashed,
            ),
        ];
        if !comparison.failure.is_empty() {
            fronts.push(front(
                "Centralized Pareto Front (FSS Failure)",
                comparison.failure.points(),
                SeriesColor::Red,
                LineStyle::Dashed,
            ));
        }

        let upside: Vec<(f64, f64, f64)> = comparison
            .samples
            .iter()
            .map(|s| (s.cost, s.independent.min(s.centralized), s.independent.max(s.centralized)))
            .collect();
        let downside: Vec<(f64, f64, f64)> = comparison
            .samples
            .iter()
            .filter_map(|s| {
                let failure = s.failure?;
                Some((s.cost, failure.min(s.independent), failure.max(s.independent)))
            })
            .collect();

        let mut notes = Vec::new();
        if let Some(&(cost, lo, hi)) = widest(&upside) {
            notes.push(TextNote {
                text: UPSIDE_NOTE.to_string(),
                at: (cost, (lo + hi) / 2.0),
                arrow_to: None,
                color: SeriesColor::Black,
            });
        }
        if let Some(&(cost, lo, hi)) = widest(&downside) {
            let target = (cost, (lo + hi) / 2.0);
            let offset = downside_offset(&axes, comparison);
            notes.push(TextNote {
                text: DOWNSIDE_NOTE.to_string(),
                at: (target.0 + offset.0, target.1 - offset.1),
                arrow_to: Some(target),
                color: SeriesColor::Red,
            });
        }

        let mut bands = vec![Band {
            samples: upside,
            color: SeriesColor::Black,
        }];
        if !downside.is_empty() {
            bands.push(Band {
                samples: downside,
                color: SeriesColor::Red,
            });
        }

        Self {
            title: title.into(),
            axes,
            fronts,
            bands,
            notes,
        }
    }

    /// Configured x range, or the extent of all fronts.
    pub fn x_range(&self) -> AxisRange {
        self.axes
            .x
            .unwrap_or_else(|| extent(self.fronts.iter().flat_map(|f| f.line.points.iter().map(|p| p.0))))
    }

    /// Configured y range, or the extent of all fronts.
    pub fn y_range(&self) -> AxisRange {
        self.axes
            .y
            .unwrap_or_else(|| extent(self.fronts.iter().flat_map(|f| f.line.points.iter().map(|p| p.1))))
    }
}

fn front(label: &str, points: &[(f64, f64)], color: SeriesColor, style: LineStyle) -> FrontLine {
    FrontLine {
        label: label.to_string(),
        line: Polyline {
            points: points.to_vec(),
            color,
            style,
        },
    }
}

fn widest(band: &[(f64, f64, f64)]) -> Option<&(f64, f64, f64)> {
    band.iter()
        .filter(|(_, lo, hi)| hi - lo > f64::EPSILON)
        .max_by(|a, b| (a.2 - a.1).total_cmp(&(b.2 - b.1)))
}

/// Text offset from the downside arrow target, a tenth of each axis span.
fn downside_offset(axes: &Axes, comparison: &FrontierComparison) -> (f64, f64) {
    let points = || {
        comparison
            .independent
            .points()
            .iter()
            .chain(comparison.failure.points())
    };
    let x = axes.x.unwrap_or_else(|| extent(points().map(|p| p.0)));
    let y = axes.y.unwrap_or_else(|| extent(points().map(|p| p.1)));
    (x.span() / 10.0, y.span() / 10.0)
}

fn extent(values: impl Iterator<Item = f64>) -> AxisRange {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() && hi.is_finite() {
        AxisRange::padded(lo, hi)
    } else {
        AxisRange { min: 0.0, max: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tradespace::{Curve, FrontierSample};

    fn comparison(with_failure: bool) -> FrontierComparison {
        let failure = if with_failure {
            Curve::from_points([(1000.0, 1500.0), (2000.0, 2000.0)])
        } else {
            Curve::default()
        };
        let samples = [1000.0, 1500.0, 2000.0]
            .into_iter()
            .map(|cost| FrontierSample {
                cost,
                independent: cost * 1.5 + 500.0,
                centralized: cost * 2.0,
                failure: failure.interpolate(cost),
            })
            .collect();
        FrontierComparison {
            independent: Curve::from_points([(1000.0, 2000.0), (2000.0, 3500.0)]),
            centralized: Curve::from_points([(1000.0, 2000.0), (2000.0, 4000.0)]),
            failure,
            counterparts: Vec::new(),
            samples,
        }
    }

    #[test]
    fn three_fronts_with_bands_and_notes() {
        let chart = FrontierChart::build("2-exp", &comparison(true), Axes::default());

        let labels: Vec<&str> = chart.fronts.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Independent Pareto Front",
                "Centralized Pareto Front (FSS Success)",
                "Centralized Pareto Front (FSS Failure)"
            ]
        );
        assert_eq!(chart.fronts[2].line.color, SeriesColor::Red);
        assert_eq!(chart.bands.len(), 2);

        // Upside gap peaks at the most expensive sample: 4000 vs 3500.
        let upside = &chart.notes[0];
        assert_eq!(upside.text, UPSIDE_NOTE);
        assert_eq!(upside.at, (2000.0, 3750.0));

        let downside = &chart.notes[1];
        assert_eq!(downside.text, DOWNSIDE_NOTE);
        assert_eq!(downside.arrow_to, Some((2000.0, 2750.0)));
        assert!(downside.at.0 > 2000.0 && downside.at.1 < 2750.0);
    }

    #[test]
    fn missing_failure_curve_drops_its_front_and_band() {
        let chart = FrontierChart::build("2-exp", &comparison(false), Axes::default());

        assert_eq!(chart.fronts.len(), 2);
        assert_eq!(chart.bands.len(), 1);
        assert_eq!(chart.notes.len(), 1);
    }

    #[test]
    fn fixed_axes_win_over_data_extent() {
        let axes = Axes {
            x: Some(AxisRange::new(1000.0, 4000.0).unwrap()),
            ..Default::default()
        };
        let chart = FrontierChart::build("2-exp", &comparison(true), axes);
        assert_eq!(chart.x_range(), AxisRange { min: 1000.0, max: 4000.0 });
        assert!(chart.y_range().min < 1500.0);
    }
}
