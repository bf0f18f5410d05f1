use std::path::PathBuf;

use crate::table::TableError;

/// Errors that can occur while writing ISA-Tab files
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the underlying TSV writer
    #[error("TSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    /// The sheets could not be generated
    #[error("Table error: {0}")]
    TableError(#[from] TableError),

    /// A field cannot be represented in a tab-separated file
    #[error("Field {value:?} in column '{column}' contains a tab or line break")]
    UnrepresentableField {
        /// Header label of the column
        column: String,
        /// The offending value
        value: String,
    },

    /// A row does not have as many fields as the header
    #[error("Row {row} has {found} fields, expected {expected}")]
    RowWidthMismatch {
        /// Zero-based row index
        row: usize,
        /// Header width
        expected: usize,
        /// Row width
        found: usize,
    },

    /// A table without columns has no tab-separated representation
    #[error("Table has no columns")]
    EmptyHeader,

    /// The experiment name cannot be used to name the sheet files
    #[error("Invalid experiment name {name:?}: {reason}")]
    InvalidExperimentName {
        /// The experiment name as supplied
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// A destination file exists and overwriting was not requested
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}
