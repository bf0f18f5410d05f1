use serde::{Deserialize, Serialize};
use std::fmt;

use super::columns;

/// Kind of a dynamic column, deciding its label pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// `Characteristics[<name>]`: property of a source or sample
    Characteristics,
    /// `Parameter Value[<name>]`: parameter of a protocol step
    ParameterValue,
}

impl ColumnKind {
    /// Wrap a column name in the label pattern of this kind
    pub fn label(&self, name: &str) -> String {
        match self {
            ColumnKind::Characteristics => columns::characteristics(name),
            ColumnKind::ParameterValue => columns::parameter_value(name),
        }
    }
}

/// Position in a column spec where a group is spliced in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionPoint {
    /// A named slot declared in the spec
    Slot(String),
    /// Immediately after the first base column with this exact label
    After(String),
}

impl fmt::Display for InsertionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertionPoint::Slot(name) => write!(f, "slot '{}'", name),
            InsertionPoint::After(label) => write!(f, "after column '{}'", label),
        }
    }
}

/// A caller-configured list of extra columns spliced into a spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnGroup {
    /// Group name, used in error messages
    pub name: String,
    /// Label pattern applied to every column of the group
    pub kind: ColumnKind,
    /// Where the group is spliced in
    pub at: InsertionPoint,
    /// Column names in caller order, without the label pattern
    pub columns: Vec<String>,
}

impl ColumnGroup {
    /// Create an empty group
    pub fn new(name: impl Into<String>, kind: ColumnKind, at: InsertionPoint) -> Self {
        Self {
            name: name.into(),
            kind,
            at,
            columns: Vec::new(),
        }
    }

    /// Create a `Characteristics` group targeting a named slot
    pub fn characteristics(slot: &str) -> Self {
        Self::new(slot, ColumnKind::Characteristics, InsertionPoint::Slot(slot.to_string()))
    }

    /// Create a `Parameter Value` group targeting a named slot
    pub fn parameter_values(slot: &str) -> Self {
        Self::new(slot, ColumnKind::ParameterValue, InsertionPoint::Slot(slot.to_string()))
    }

    /// Append column names to the group
    pub fn with_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Number of columns in the group
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the group adds no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header labels of the group's columns
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.columns.iter().map(move |name| self.kind.label(name))
    }
}
