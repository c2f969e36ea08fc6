//! Tradespace chart model - the scatter of one view, ready to draw.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::series::{LineStyle, SeriesColor, SeriesGroup, SeriesScheme};
use crate::domain::foundation::{DesignId, ValidationError};
use crate::domain::tradespace::{pareto_front, strict_frontier, DesignPoint, LinearFit, CONFIDENCE_Z};

/// Closed interval of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// # Errors
    /// `InvalidFormat` unless both ends are finite and `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        let range = Self { min, max };
        range.validate("axis_range")?;
        Ok(range)
    }

    /// Applies the rules of [`AxisRange::new`] to a range that skipped it,
    /// such as one read from a configuration file.
    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ValidationError::not_finite(field));
        }
        if self.min >= self.max {
            return Err(ValidationError::invalid_format(
                field,
                format!("min {} must be below max {}", self.min, self.max),
            ));
        }
        Ok(())
    }

    /// Range covering `[lo, hi]` with 5% headroom on both sides.
    pub fn padded(lo: f64, hi: f64) -> Self {
        let span = hi - lo;
        let pad = if span > f64::EPSILON { span * 0.05 } else { lo.abs().max(1.0) * 0.05 };
        Self {
            min: lo - pad,
            max: hi + pad,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Axis captions and optional fixed ranges. Unset ranges follow the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axes {
    pub x_label: String,
    pub y_label: String,
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl Axes {
    /// Checks the fixed ranges, naming them `<field>.x` and `<field>.y`.
    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        for (axis, range) in [("x", &self.x), ("y", &self.y)] {
            if let Some(range) = range {
                range.validate(&format!("{}.{}", field, axis))?;
            }
        }
        Ok(())
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            x_label: "Initial Cost ($)".to_string(),
            y_label: "Expected Value ($)".to_string(),
            x: None,
            y: None,
        }
    }
}

/// Which points get their design id printed next to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRule {
    #[default]
    None,
    /// Points no cheaper-or-equal point of the same series beats on value.
    StrictWithinSeries,
    /// Survivors of the statistical filter within the same series.
    ParetoWithinSeries,
    /// Strict test within designs sharing the same ground link ownership,
    /// regardless of ISL.
    StrictWithinGroundLinks,
}

/// How a view is turned into a chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub scheme: SeriesScheme,
    pub labels: LabelRule,
    /// Draw the strictly efficient front of the whole view.
    pub overall_front: bool,
    /// Draw a least-squares trend line through the whole view.
    pub regression: bool,
    pub legend: bool,
    /// Marker opacity in `0.0..=1.0`; `None` draws opaque markers.
    pub marker_alpha: Option<f64>,
    pub axes: Axes,
}

/// A marker with its 95% error bar half-height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub id: DesignId,
    pub cost: f64,
    pub value: f64,
    pub error: f64,
}

impl From<&DesignPoint> for PlottedPoint {
    fn from(p: &DesignPoint) -> Self {
        Self {
            id: p.id(),
            cost: p.cost(),
            value: p.value(),
            error: CONFIDENCE_Z * p.std_err(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub group: SeriesGroup,
    pub points: Vec<PlottedPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLabel {
    pub id: DesignId,
    pub cost: f64,
    pub value: f64,
    pub color: SeriesColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub color: SeriesColor,
    pub style: LineStyle,
}

/// Trend line and the fit it was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub fit: LinearFit,
    pub line: Polyline,
}

/// Everything a renderer needs for one tradespace image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradespaceChart {
    pub title: String,
    pub axes: Axes,
    pub series: Vec<ChartSeries>,
    pub labels: Vec<PointLabel>,
    pub overall_front: Option<Polyline>,
    pub trend: Option<TrendLine>,
    pub legend: bool,
    pub marker_alpha: Option<f64>,
}

impl TradespaceChart {
    /// Lays out `points` according to `options`.
    ///
    /// Points whose tags fall outside the scheme are left off the chart but
    /// still count towards the overall front. Empty series are kept so
    /// legends stay stable across views.
    pub fn build(title: impl Into<String>, points: &[DesignPoint], options: &ChartOptions) -> Self {
        let groups = options.scheme.groups();
        let mut members: Vec<Vec<DesignPoint>> = vec![Vec::new(); groups.len()];
        for point in points {
            if let Some(i) = options.scheme.group_of(point.tags()) {
                members[i].push(point.clone());
            }
        }

        let plotted: Vec<DesignPoint> = members.iter().flatten().cloned().collect();

        let labelled: HashSet<DesignId> = match options.labels {
            LabelRule::None => HashSet::new(),
            LabelRule::StrictWithinSeries => members
                .iter()
                .flat_map(|pts| strict_frontier(pts).into_iter().map(|p| p.id()))
                .collect(),
            LabelRule::ParetoWithinSeries => members.iter().flat_map(|pts| pareto_front(pts).ids()).collect(),
            LabelRule::StrictWithinGroundLinks => {
                let (open, proprietary): (Vec<DesignPoint>, Vec<DesignPoint>) =
                    plotted.iter().cloned().partition(|p| p.tags().osgl);
                strict_frontier(&open)
                    .into_iter()
                    .chain(strict_frontier(&proprietary))
                    .map(|p| p.id())
                    .collect()
            }
        };
        let mut labels = Vec::new();
        for (group, pts) in groups.iter().zip(&members) {
            labels.extend(pts.iter().filter(|p| labelled.contains(&p.id())).map(|p| PointLabel {
                id: p.id(),
                cost: p.cost(),
                value: p.value(),
                color: group.color,
            }));
        }

        let overall_front = options.overall_front.then(|| {
            let mut vertices: Vec<(f64, f64)> = pareto_front(points)
                .strictly_efficient()
                .into_iter()
                .map(|p| (p.cost(), p.value()))
                .collect();
            vertices.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
            Polyline {
                points: vertices,
                color: SeriesColor::Grey,
                style: LineStyle::Dashed,
            }
        });

        let trend = if options.regression {
            LinearFit::least_squares(&plotted).and_then(|fit| {
                let (lo, hi) = cost_extent(&plotted)?;
                Some(TrendLine {
                    fit,
                    line: Polyline {
                        points: vec![(lo, fit.predict(lo)), (hi, fit.predict(hi))],
                        color: SeriesColor::Grey,
                        style: LineStyle::Solid,
                    },
                })
            })
        } else {
            None
        };

        let series = groups
            .into_iter()
            .zip(members)
            .map(|(group, pts)| ChartSeries {
                group,
                points: pts.iter().map(PlottedPoint::from).collect(),
            })
            .collect();

        Self {
            title: title.into(),
            axes: options.axes.clone(),
            series,
            labels,
            overall_front,
            trend,
            legend: options.legend,
            marker_alpha: options.marker_alpha,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Configured x range, or the data extent with headroom.
    pub fn x_range(&self) -> AxisRange {
        self.axes.x.unwrap_or_else(|| {
            let (lo, hi) = self
                .extents()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (x, _, _)| (lo.min(x), hi.max(x)));
            data_range(lo, hi)
        })
    }

    /// Configured y range, or the data extent including error bars.
    pub fn y_range(&self) -> AxisRange {
        self.axes.y.unwrap_or_else(|| {
            let (lo, hi) = self
                .extents()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, bottom, top)| {
                    (lo.min(bottom), hi.max(top))
                });
            data_range(lo, hi)
        })
    }

    /// `(x, y_low, y_high)` of every marker and overall front vertex.
    fn extents(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let markers = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| (p.cost, p.value - p.error, p.value + p.error));
        let front = self
            .overall_front
            .iter()
            .flat_map(|line| line.points.iter())
            .map(|&(x, y)| (x, y, y));
        markers.chain(front)
    }
}

fn cost_extent(points: &[DesignPoint]) -> Option<(f64, f64)> {
    let lo = points.iter().map(|p| p.cost()).reduce(f64::min)?;
    let hi = points.iter().map(|p| p.cost()).reduce(f64::max)?;
    Some((lo, hi))
}

fn data_range(lo: f64, hi: f64) -> AxisRange {
    if lo.is_finite() && hi.is_finite() {
        AxisRange::padded(lo, hi)
    } else {
        AxisRange { min: 0.0, max: 1.0 }
    }
}
