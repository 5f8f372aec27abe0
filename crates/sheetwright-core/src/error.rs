//! Error types for sheetwright-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwright-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// A cell refers to a style id the workbook never registered
    #[error("Invalid style index: {0}")]
    InvalidStyleIndex(u32),

    /// Malformed or missing required input to an operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value failed a setter's type contract
    #[error("Value sent to {setter} function of cells {cells} {reason}")]
    InvalidValue {
        /// Setter that rejected the value ("Number", "Bool", "Formula")
        setter: &'static str,
        /// Addresses the setter was bound to, e.g. `["A1","B1"]`
        cells: String,
        /// What was wrong with the value
        reason: String,
    },

    /// A requested merge overlaps an already registered merged range
    #[error("Cannot merge {requested}: cells already belong to merged range {conflict}")]
    MergedCellConflict {
        /// The range that was requested
        requested: String,
        /// The first registered range it collides with
        conflict: String,
    },

    /// Workbook settings could not be parsed
    #[error("Invalid workbook settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl Error {
    /// Create a new "invalid argument" error with a message
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
