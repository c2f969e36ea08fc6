//! Results Reader Port - Source of simulation result records.
//!
//! The domain never parses files itself. A reader hands back fully typed
//! records or fails; there is no partial result.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::tradespace::ResultRecord;

/// Port for loading every result record of one run.
///
/// # Contract
///
/// Implementations must:
/// - Return records in input order with ids assigned in that order
/// - Fail on the first malformed row, naming the row and column
/// - Never return a record that fails `ResultRecord::validate`
pub trait ResultsReader {
    /// Reads all records.
    ///
    /// # Errors
    ///
    /// Returns `IngestError` for I/O failures and malformed rows.
    fn read_records(&self) -> Result<Vec<ResultRecord>, IngestError>;
}

/// Errors raised while ingesting results.
///
/// Row numbers are 1-based and count the header row, so they match what a
/// spreadsheet shows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source could not be read.
    #[error("Failed to read {source_name}: {reason}")]
    Io { source_name: String, reason: String },

    /// A row is shorter than the layout requires.
    #[error("Row {row}: missing column {column}")]
    MissingColumn { row: usize, column: String },

    /// A field could not be parsed.
    #[error("Row {row}, column {column}: cannot parse {value:?} ({reason})")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    /// The row parsed but describes an impossible record.
    #[error("Row {row}: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

impl IngestError {
    pub fn io(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Io {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_column(row: usize, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            row,
            column: column.into(),
        }
    }

    pub fn invalid_field(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidField {
            row,
            column: column.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_record(row: usize, source: ValidationError) -> Self {
        Self::InvalidRecord { row, source }
    }

    /// Row the error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::MissingColumn { row, .. }
            | Self::InvalidField { row, .. }
            | Self::InvalidRecord { row, .. } => Some(*row),
        }
    }
}

impl From<IngestError> for DomainError {
    fn from(err: IngestError) -> Self {
        let row = err.row();
        let mut domain = DomainError::new(ErrorCode::IngestFailed, err.to_string());
        if let Some(row) = row {
            domain = domain.with_detail("row", row.to_string());
        }
        match err {
            IngestError::MissingColumn { column, .. } | IngestError::InvalidField { column, .. } => {
                domain.with_detail("column", column)
            }
            IngestError::InvalidRecord { source, .. } => domain.with_detail("field", source.field()),
            IngestError::Io { source_name, .. } => domain.with_detail("source", source_name),
        }
    }
}
