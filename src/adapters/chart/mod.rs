//! Chart adapters - drawing chart models.

mod plotters_renderer;
mod recording_renderer;

pub use plotters_renderer::{ImageFormat, PlottersRenderer, RenderSettings};
pub use recording_renderer::{RecordedChart, RecordingRenderer};
