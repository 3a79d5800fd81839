//! Error types with actionable diagnostics (Andon principle).
//!
//! Every input check runs before the first drawing call, so an error never
//! leaves a half-rendered surface behind.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for heatmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating inputs or rendering heatmaps.
#[derive(Error, Debug)]
pub enum Error {
    /// Input vector or matrix does not have the required cardinality.
    #[error("Shape mismatch for {what}: expected {expected:?}, got {actual:?}\n  → Pass one value per Sudoku cell (81) and one logit per digit (9)")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A highlighted cell index falls outside the grid.
    #[error("Cell index {index} out of range: grid has {cells} cells (0..={max})\n  → Use flat row-major indices, row * 9 + column", max = .cells.saturating_sub(1))]
    CellIndexOutOfRange { index: usize, cells: usize },

    /// A logit is NaN or infinite, so its softmax is undefined.
    #[error("Non-finite logit {value} at cell {cell}, class {class}\n  → Check the model output for overflow or NaN propagation")]
    NonFiniteLogit { cell: usize, class: usize, value: f32 },

    /// Configuration file could not be read or parsed.
    #[error("Invalid configuration in {path}:\n  {message}\n  → Check YAML syntax and field names")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue {
        field: String,
        message: String,
        suggestion: String,
    },

    /// Input document could not be parsed.
    #[error("Invalid input file {path}:\n  {message}\n  → Expected JSON with a \"probabilities\" or \"logits\" array")]
    InputParsing { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Drawing backend failure.
    #[error("Render error: {message}")]
    Render { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a render error from any backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }

    /// Check if this error is recoverable by fixing the caller's input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ShapeMismatch { .. }
                | Self::CellIndexOutOfRange { .. }
                | Self::NonFiniteLogit { .. }
                | Self::ConfigParsing { .. }
                | Self::ConfigValue { .. }
                | Self::InputParsing { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigParsing { .. } => "E002",
            Self::ConfigValue { .. } => "E003",
            Self::InputParsing { .. } => "E010",
            Self::ShapeMismatch { .. } => "E040",
            Self::CellIndexOutOfRange { .. } => "E041",
            Self::NonFiniteLogit { .. } => "E042",
            Self::Io { .. } => "E050",
            Self::Render { .. } => "E060",
        }
    }
}
