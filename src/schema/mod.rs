//! # ISA-Tab Column Schema
//!
//! This module defines the column layout of ISA-Tab study and assay sheets.
//!
//! ## Design Rationale
//!
//! A sheet is described by a [`ColumnSpec`]: an ordered list of fixed base
//! columns, each with a [`FieldSource`] telling how its per-row value is
//! obtained, interleaved with named *slots*. Caller-configured
//! [`ColumnGroup`]s are spliced into the spec at a slot, or right after a
//! given base column, when the spec is expanded into a header.
//!
//! ## Column Label Conventions
//!
//! | Label | Meaning |
//! |-------|---------|
//! | `Source Name` / `Sample Name` / `Extract Name` / `Library Name` | Material identifiers linking sheets |
//! | `Characteristics[<name>]` | Intrinsic property of a source or sample |
//! | `Parameter Value[<name>]` | Parameter of the preceding protocol step |
//! | `Protocol REF` | Starts a protocol step; repeats once per step |
//! | `Performer`, `Date` | Who ran the preceding protocol step, and when |
//! | `Term Source REF`, `Term Accession Number` | Ontology reference of the preceding column |
//!
//! Dynamic group columns only reserve space in the header; their per-row
//! values are left empty for later curation.

mod builders;
/// Column label constants and label formatting.
pub mod columns;
mod error;
mod group;

#[cfg(test)]
mod tests;

pub use builders::{BaseColumn, ColumnSpec, FieldSource, HeaderColumn};
pub use error::SchemaError;
pub use group::{ColumnGroup, ColumnKind, InsertionPoint};
