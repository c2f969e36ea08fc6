//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResultsReader` - Loads simulation result records
//! - `ChartRenderer` - Writes chart models as image files

mod chart_renderer;
mod results_reader;

pub use chart_renderer::{ChartRenderer, RenderError};
pub use results_reader::{IngestError, ResultsReader};
