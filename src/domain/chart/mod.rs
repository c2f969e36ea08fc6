//! Chart Module - Renderer-independent chart models.
//!
//! # Components
//!
//! - `SeriesScheme` - Grouping and coloring of designs into series
//! - `TradespaceChart` - Scatter with error bars, labels and optional overlays
//! - `FrontierChart` - Independent, centralized and failure fronts with bands
//!
//! Renderers only translate these models to pixels; every decision about
//! what to draw is made here.

mod frontier_chart;
mod series;
mod tradespace_chart;

pub use frontier_chart::{Band, FrontLine, FrontierChart, TextNote, DOWNSIDE_NOTE, UPSIDE_NOTE};
pub use series::{LineStyle, SeriesColor, SeriesGroup, SeriesScheme};
pub use tradespace_chart::{
    AxisRange, Axes, ChartOptions, ChartSeries, LabelRule, PlottedPoint, PointLabel, Polyline,
    TradespaceChart, TrendLine,
};
