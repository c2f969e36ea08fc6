//! Chart Renderer Port - Draws chart models to image files.

use std::path::Path;
use thiserror::Error;

use crate::domain::chart::{FrontierChart, TradespaceChart};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for turning chart models into files.
///
/// # Contract
///
/// Implementations must:
/// - Write exactly one file at `path`, replacing any existing one
/// - Draw only what the model describes; layout decisions stay in the domain
/// - Refuse a tradespace chart without points (`RenderError::EmptyChart`)
/// - Refuse an axis range that is empty, inverted or non-finite
///   (`RenderError::InvalidAxis`)
pub trait ChartRenderer {
    /// Draws a tradespace scatter.
    fn render_tradespace(&self, chart: &TradespaceChart, path: &Path) -> Result<(), RenderError>;

    /// Draws a frontier comparison.
    fn render_frontier(&self, chart: &FrontierChart, path: &Path) -> Result<(), RenderError>;

    /// File extension written by this renderer, without the dot.
    fn extension(&self) -> &str;
}

/// Errors raised while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output file or directory could not be written.
    #[error("Failed to write {path}: {reason}")]
    Io { path: String, reason: String },

    /// The drawing backend failed.
    #[error("Drawing backend failed: {0}")]
    Backend(String),

    /// Nothing to draw.
    #[error("Chart '{title}' has no points")]
    EmptyChart { title: String },

    /// An axis cannot be laid out.
    #[error("Chart '{title}' has an unusable axis: {reason}")]
    InvalidAxis { title: String, reason: String },
}

impl RenderError {
    pub fn io(path: &Path, reason: impl ToString) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn backend(reason: impl ToString) -> Self {
        Self::Backend(reason.to_string())
    }

    pub fn empty_chart(title: impl Into<String>) -> Self {
        Self::EmptyChart { title: title.into() }
    }

    pub fn invalid_axis(title: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidAxis {
            title: title.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<RenderError> for DomainError {
    fn from(err: RenderError) -> Self {
        let code = match err {
            RenderError::EmptyChart { .. } => ErrorCode::EmptyView,
            RenderError::InvalidAxis { .. } => ErrorCode::ValidationFailed,
            RenderError::Io { .. } | RenderError::Backend(_) => ErrorCode::RenderFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
