//! # isasheet - ISA-Tab Sheets for Stem-Cell Single-Cell Studies
//!
//! `isasheet` generates the sample sheet (`s_*.txt`) and assay sheet (`a_*.txt`)
//! of an ISA-Tab study from a list of sample identifiers and a handful of shared
//! study annotations, plus the investigation file (`i_Investigation.txt`) that
//! ties them together.
//!
//! ## Key Features
//!
//! - **Declarative Column Layouts**: Each sheet is a [`schema::ColumnSpec`], a
//!   fixed sequence of base columns with named slots where caller-defined
//!   column groups are spliced in.
//!
//! - **Linked Sheets**: Both sheets normalize sample identifiers the same way,
//!   so `Sample Name` in the assay sheet always matches the sample sheet.
//!
//! - **Controlled Vocabulary**: Known organisms are annotated with their
//!   NCBI Taxonomy term source and accession.
//!
//! - **All-or-Nothing Output**: Tables are validated in full before anything
//!   is written, and files are replaced atomically.
//!
//! ## Quick Start
//!
//! ```rust
//! use isasheet::metadata::StudyDesign;
//! use isasheet::sheets::StageColumns;
//!
//! let study = StudyDesign::new("organoid_timecourse")
//!     .with_samples(["D0-1", "D7-1"])
//!     .with_organism_name("Homo sapiens")
//!     .with_source_type("iPSC")
//!     .with_model_type("organoid")
//!     .with_library_kit("Chromium Next GEM Single Cell 3' v3.1")
//!     .with_library_type("3'")
//!     .with_stages(StageColumns {
//!         source_characteristics: vec!["genotype".to_string()],
//!         ..Default::default()
//!     });
//!
//! let sheets = study.build_sheets()?;
//! assert_eq!(sheets.sample.field(0, "Sample Name"), Some("D0_1"));
//! assert_eq!(sheets.assay.field(1, "Extract Name"), Some("D7_1_GEX"));
//! # Ok::<(), isasheet::table::TableError>(())
//! ```
//!
//! Writing a full ISA-Tab directory:
//!
//! ```rust,no_run
//! use isasheet::metadata::StudyDesign;
//! use isasheet::writer::{write_isatab, WriteOptions};
//!
//! let study = StudyDesign::new("organoid_timecourse").with_samples(["D0-1"]);
//! let summary = write_isatab("isa", &study, &WriteOptions::default())?;
//! println!("Wrote {} files", summary.files.len());
//! # Ok::<(), isasheet::writer::WriterError>(())
//! ```
//!
//! ## Modules
//!
//! - [`schema`]: column specs, column groups and header expansion
//! - [`table`]: the generic `TableBuilder` and identifier normalization
//! - [`sheets`]: the sample and assay sheet layouts
//! - [`metadata`]: study-level inputs
//! - [`controlled_vocabulary`]: ontology terms and sources
//! - [`writer`]: tab-separated output and the investigation file

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod controlled_vocabulary;
pub mod metadata;
pub mod schema;
pub mod sheets;
pub mod table;
pub mod writer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::controlled_vocabulary::{organisms, OntologyTerm};
    pub use crate::metadata::{Sheets, StudyDesign};
    pub use crate::schema::{columns, ColumnGroup, ColumnKind, ColumnSpec, InsertionPoint};
    pub use crate::sheets::{assay_sheet_spec, sample_sheet_spec, SheetKind, StageColumns};
    pub use crate::table::{normalize_identifier, SharedFields, Table, TableBuilder, TableError};
    pub use crate::writer::{table_to_string, write_isatab, WriteOptions, WriterError};
}
