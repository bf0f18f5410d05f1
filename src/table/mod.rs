//! # Table Builder
//!
//! Projects an ordered list of sample identifiers onto an expanded column
//! spec, producing a [`Table`] with one row per sample.
//!
//! Generation is a two-stage pipeline:
//!
//! 1. **Header assembly**: the [`ColumnSpec`](crate::schema::ColumnSpec) is
//!    expanded with the caller's column groups when the [`TableBuilder`] is
//!    created. An unresolvable group fails right there.
//! 2. **Row assembly**: every identifier is validated and normalized first;
//!    only then are rows built. A single invalid identifier rejects the whole
//!    table, so a table is either complete or not produced at all.
//!
//! Every row has exactly as many fields as the header. A missing value is
//! the empty string, never an omitted field.

mod builder;
mod error;
mod identifier;
mod shared;


pub use builder::{Table, TableBuilder};
pub use error::TableError;
pub use identifier::normalize_identifier;
pub use shared::SharedFields;
