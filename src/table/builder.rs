use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{normalize_identifier, SharedFields, TableError};
use crate::schema::{ColumnGroup, ColumnSpec, FieldSource, HeaderColumn};

/// A generated sheet: header plus one row per sample, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column labels
    pub header: Vec<String>,
    /// Rows of field values, each exactly as long as the header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Index of the first column with the given label
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.header.iter().position(|h| h == label)
    }

    /// Indices of every column with the given label
    pub fn column_indices<'a>(&'a self, label: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.header
            .iter()
            .enumerate()
            .filter(move |(_, h)| h.as_str() == label)
            .map(|(i, _)| i)
    }

    /// Value of the first column with the given label in a row
    pub fn field(&self, row: usize, label: &str) -> Option<&str> {
        let column = self.column_index(label)?;
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Values of the first column with the given label, one per row
    ///
    /// Returns `None` when no column has the label or a row is too short
    /// to hold it.
    pub fn column(&self, label: &str) -> Option<Vec<&str>> {
        let column = self.column_index(label)?;
        self.rows
            .iter()
            .map(|row| row.get(column).map(String::as_str))
            .collect()
    }
}

/// Builds tables for one expanded column spec
///
/// The spec is expanded once, when the builder is created; the builder can
/// then produce any number of tables over different sample lists.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    columns: Vec<HeaderColumn>,
    shared: SharedFields,
}

impl TableBuilder {
    /// Expand `spec` with `groups` and bind the shared field values
    pub fn new(
        spec: &ColumnSpec,
        groups: &[ColumnGroup],
        shared: SharedFields,
    ) -> Result<Self, TableError> {
        let columns = spec.expand(groups)?;

        for column in &columns {
            if let FieldSource::Shared(key) = &column.source {
                if !shared.contains(key) {
                    warn!(
                        "No value for shared field '{}'; column '{}' will be empty",
                        key, column.label
                    );
                }
            }
        }

        Ok(Self { columns, shared })
    }

    /// Expanded header columns with their value sources
    pub fn columns(&self) -> &[HeaderColumn] {
        &self.columns
    }

    /// Shared field values bound to this builder
    pub fn shared(&self) -> &SharedFields {
        &self.shared
    }

    /// Header labels in column order
    pub fn build_header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    /// Build the row for one raw sample identifier
    pub fn build_row(&self, sample: &str) -> Result<Vec<String>, TableError> {
        let normalized = normalize_identifier(sample)?;
        Ok(self.row_for(&normalized))
    }

    /// Build the full table for an ordered list of raw sample identifiers
    ///
    /// All identifiers are validated before any row is built; the first
    /// invalid one fails the whole table. An empty list yields a header-only
    /// table.
    pub fn build_table<S: AsRef<str>>(&self, samples: &[S]) -> Result<Table, TableError> {
        let normalized = samples
            .iter()
            .map(|s| normalize_identifier(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let rows: Vec<Vec<String>> = normalized.iter().map(|id| self.row_for(id)).collect();

        debug!(
            "Built table with {} columns and {} rows",
            self.columns.len(),
            rows.len()
        );

        Ok(Table {
            header: self.build_header(),
            rows,
        })
    }

    fn row_for(&self, normalized: &str) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| match &column.source {
                FieldSource::Literal(value) => value.clone(),
                FieldSource::Shared(key) => self.shared.get(key).unwrap_or_default().to_string(),
                FieldSource::SampleName => normalized.to_string(),
                FieldSource::SampleNameWithSuffix(suffix) => format!("{}{}", normalized, suffix),
                FieldSource::Empty => String::new(),
            })
            .collect()
    }
}
