//! Error types for table rendering.
//!
//! [`TableError`] is returned by every rendering entry point. Configuration
//! problems are always reported before a single byte reaches the sink.

use thiserror::Error;

/// Errors raised while reading a [`RowSource`](crate::RowSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested cell does not exist in the source.
    #[error("no value at row {row}, column {col}")]
    OutOfBounds { row: usize, col: usize },

    /// Any other failure reported by a source adapter.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Wraps an arbitrary adapter error.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SourceError::Other(err.into())
    }
}

/// Errors that can occur when rendering a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A per-column alignment vector does not match the column count.
    #[error("alignment has {actual} entries but the data has {expected} columns")]
    AlignmentLength { expected: usize, actual: usize },

    /// A per-column header style vector does not match the column count.
    #[error("{option} has {actual} styles but the data has {expected} columns")]
    StyleLength {
        option: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A header row does not match the column count.
    #[error("header row {row} has {actual} labels but the data has {expected} columns")]
    HeaderColumns {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Sorted key order was requested but two keys cannot be compared.
    #[error("cannot sort keys: '{left}' and '{right}' are not comparable")]
    UnsortableKeys { left: String, right: String },

    /// A style glyph does not occupy exactly one terminal cell.
    #[error("style glyph '{slot}' ({glyph:?}) is {width} cells wide, expected 1")]
    InvalidGlyph {
        slot: &'static str,
        glyph: char,
        width: usize,
    },

    /// A configuration document could not be parsed.
    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),

    /// Reading the source failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Writing to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Returns `true` for errors caused by an inconsistent configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TableError::AlignmentLength { .. }
                | TableError::StyleLength { .. }
                | TableError::HeaderColumns { .. }
                | TableError::UnsortableKeys { .. }
                | TableError::InvalidGlyph { .. }
                | TableError::InvalidConfig(_)
        )
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::InvalidConfig(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::InvalidConfig(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
