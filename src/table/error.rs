use crate::schema::SchemaError;

/// Errors that can occur while building a table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A sample identifier is empty or contains a delimiter character
    #[error("Invalid sample identifier {identifier:?}: {reason}")]
    InvalidIdentifier {
        /// The raw identifier as supplied
        identifier: String,
        /// Why the identifier was rejected
        reason: String,
    },

    /// The column spec could not be expanded
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
