use super::InsertionPoint;

/// Errors that can occur while expanding a column spec
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A column group targets an insertion point the spec does not define
    #[error("Malformed column group '{group}': undefined insertion point {point}")]
    MalformedColumnGroup {
        /// Name of the offending group
        group: String,
        /// The insertion point that could not be resolved
        point: InsertionPoint,
    },

    /// A dynamic column name cannot be represented in a tab-separated header
    #[error("Invalid column name {name:?} in group '{group}': names must be non-empty and free of tabs and line breaks")]
    InvalidColumnName {
        /// Name of the offending group
        group: String,
        /// The rejected column name
        name: String,
    },
}
