//! Tabular adapters - result records from comma-separated files.

mod csv_results_reader;
mod in_memory_results_reader;
mod layout;

pub use csv_results_reader::CsvResultsReader;
pub use in_memory_results_reader::InMemoryResultsReader;
pub use layout::{ColumnLayout, LayoutPreset};
