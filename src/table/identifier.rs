use super::TableError;

/// Normalize a raw sample identifier for use in ISA-Tab name columns
///
/// Every hyphen becomes an underscore; case, digits and other punctuation are
/// kept. The result has the same length as the input and normalizing it again
/// is a no-op.
///
/// Empty identifiers and identifiers containing a tab or line break are
/// rejected, since they cannot survive a tab-separated, line-oriented file.
///
/// ```rust
/// use isasheet::table::normalize_identifier;
///
/// assert_eq!(normalize_identifier("D7-rep-2").unwrap(), "D7_rep_2");
/// assert!(normalize_identifier("").is_err());
/// ```
pub fn normalize_identifier(raw: &str) -> Result<String, TableError> {
    if raw.is_empty() {
        return Err(TableError::InvalidIdentifier {
            identifier: raw.to_string(),
            reason: "identifier is empty".to_string(),
        });
    }

    if let Some(c) = raw.chars().find(|c| matches!(c, '\t' | '\n' | '\r')) {
        return Err(TableError::InvalidIdentifier {
            identifier: raw.to_string(),
            reason: format!("contains delimiter character {:?}", c),
        });
    }

    Ok(raw.replace('-', "_"))
}
