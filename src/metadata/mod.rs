//! # Study Metadata
//!
//! This module gathers the user-supplied description of a study and turns it
//! into the sample and assay sheets.
//!
//! ## Metadata Categories
//!
//! 1. **Identity**: experiment name and the ordered list of sample identifiers
//!
//! 2. **Shared fields**: scalar values repeated on every row, such as the
//!    organism with its ontology reference, source and model type, library
//!    kit and library type (keys in [`fields`])
//!
//! 3. **Stage columns**: extra characteristic and parameter columns per
//!    workflow stage, reserved in the header for later curation

/// Keys of the shared fields used by the built-in sheets.
pub mod fields;
mod study;


pub use study::{Sheets, StudyDesign};
