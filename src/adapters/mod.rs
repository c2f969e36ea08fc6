//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `tabular` - Result records from CSV files (and in memory)
//! - `chart` - Chart rendering with plotters (and a recording stub)

pub mod chart;
pub mod tabular;

pub use chart::{ImageFormat, PlottersRenderer, RecordedChart, RecordingRenderer, RenderSettings};
pub use tabular::{ColumnLayout, CsvResultsReader, InMemoryResultsReader, LayoutPreset};
