use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{ColumnGroup, InsertionPoint, SchemaError};

/// How the value of a base column is obtained for each row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// The same constant on every row (e.g., a protocol name)
    Literal(String),
    /// A shared field looked up by key; empty when not supplied
    Shared(String),
    /// The normalized sample identifier
    SampleName,
    /// The normalized sample identifier followed by a fixed suffix
    SampleNameWithSuffix(String),
    /// Always empty, to be filled in later
    Empty,
}

/// A fixed column of a spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseColumn {
    /// Header label
    pub label: String,
    /// Value source for each row
    pub source: FieldSource,
}

/// A column of an expanded header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderColumn {
    /// Header label
    pub label: String,
    /// Value source for each row
    pub source: FieldSource,
    /// Name of the dynamic group the column came from, `None` for base columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum SpecEntry {
    Column(BaseColumn),
    Slot(String),
}

/// Ordered base columns with named slots for dynamic column groups
///
/// Built with chained calls, in header order:
///
/// ```rust
/// use isasheet::schema::{columns, ColumnGroup, ColumnSpec};
///
/// let spec = ColumnSpec::new()
///     .sample_name(columns::SAMPLE_NAME)
///     .literal(columns::PROTOCOL_REF, "Dissociation")
///     .slot("dissociation_parameters")
///     .empty(columns::PERFORMER);
///
/// let group = ColumnGroup::parameter_values("dissociation_parameters").with_columns(["enzyme"]);
/// let header = spec.expand(&[group]).unwrap();
/// let labels: Vec<_> = header.iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(
///     labels,
///     ["Sample Name", "Protocol REF", "Parameter Value[enzyme]", "Performer"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    entries: Vec<SpecEntry>,
}

impl ColumnSpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a base column
    pub fn column(mut self, label: &str, source: FieldSource) -> Self {
        self.entries.push(SpecEntry::Column(BaseColumn {
            label: label.to_string(),
            source,
        }));
        self
    }

    /// Append a column holding the same constant on every row
    pub fn literal(self, label: &str, value: &str) -> Self {
        self.column(label, FieldSource::Literal(value.to_string()))
    }

    /// Append a column holding a shared field
    pub fn shared(self, label: &str, key: &str) -> Self {
        self.column(label, FieldSource::Shared(key.to_string()))
    }

    /// Append a column holding the normalized sample identifier
    pub fn sample_name(self, label: &str) -> Self {
        self.column(label, FieldSource::SampleName)
    }

    /// Append a column holding the normalized sample identifier plus a suffix
    pub fn sample_name_with_suffix(self, label: &str, suffix: &str) -> Self {
        self.column(label, FieldSource::SampleNameWithSuffix(suffix.to_string()))
    }

    /// Append an always-empty column
    pub fn empty(self, label: &str) -> Self {
        self.column(label, FieldSource::Empty)
    }

    /// Declare a named slot at the current position
    pub fn slot(mut self, name: &str) -> Self {
        self.entries.push(SpecEntry::Slot(name.to_string()));
        self
    }

    /// Base columns in order
    pub fn base_columns(&self) -> impl Iterator<Item = &BaseColumn> {
        self.entries.iter().filter_map(|entry| match entry {
            SpecEntry::Column(column) => Some(column),
            SpecEntry::Slot(_) => None,
        })
    }

    /// Slot names in order
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            SpecEntry::Slot(name) => Some(name.as_str()),
            SpecEntry::Column(_) => None,
        })
    }

    /// Whether the spec resolves the given insertion point
    pub fn resolves(&self, point: &InsertionPoint) -> bool {
        match point {
            InsertionPoint::Slot(name) => self.slots().any(|slot| slot == name),
            InsertionPoint::After(label) => self.base_columns().any(|c| &c.label == label),
        }
    }

    /// Splice column groups into the spec, producing the full header
    ///
    /// Groups sharing an insertion point keep their relative order. Every
    /// group is checked before anything is assembled, so an unresolvable
    /// insertion point fails the whole expansion.
    pub fn expand(&self, groups: &[ColumnGroup]) -> Result<Vec<HeaderColumn>, SchemaError> {
        for group in groups {
            if !self.resolves(&group.at) {
                return Err(SchemaError::MalformedColumnGroup {
                    group: group.name.clone(),
                    point: group.at.clone(),
                });
            }
            if let Some(name) = group.columns.iter().find(|name| !is_valid_column_name(name)) {
                return Err(SchemaError::InvalidColumnName {
                    group: group.name.clone(),
                    name: name.clone(),
                });
            }
        }

        let mut header = Vec::new();
        let mut seen_labels = HashSet::new();

        for entry in &self.entries {
            match entry {
                SpecEntry::Column(column) => {
                    header.push(HeaderColumn {
                        label: column.label.clone(),
                        source: column.source.clone(),
                        group: None,
                    });
                    // Only the first column with a label anchors `After` groups.
                    if seen_labels.insert(column.label.as_str()) {
                        let point = InsertionPoint::After(column.label.clone());
                        splice(&mut header, groups, &point);
                    }
                }
                SpecEntry::Slot(name) => {
                    splice(&mut header, groups, &InsertionPoint::Slot(name.clone()));
                }
            }
        }

        debug!(
            "Expanded {} base columns and {} groups into {} header columns",
            self.base_columns().count(),
            groups.len(),
            header.len()
        );

        Ok(header)
    }
}

fn splice(header: &mut Vec<HeaderColumn>, groups: &[ColumnGroup], point: &InsertionPoint) {
    for group in groups.iter().filter(|g| &g.at == point) {
        header.extend(group.labels().map(|label| HeaderColumn {
            label,
            source: FieldSource::Empty,
            group: Some(group.name.clone()),
        }));
    }
}

fn is_valid_column_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['\t', '\n', '\r'])
}
