//! Error types for the data-loader crate.
//!
//! Only genuinely fatal conditions live here. A row without a title or a
//! numeric cell that does not parse is part of normal cleaning and never
//! surfaces as an error.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog.
///
/// Any of these aborts the load; no partial catalog is ever returned.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV structure itself is broken (bad quoting, invalid UTF-8, ...)
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// The source has rows but none of them carries a title
    #[error("None of the {rows} rows has a title")]
    NoTitledRows { rows: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
