//! # ISA-Tab Writer
//!
//! Writes generated sheets to disk as an ISA-Tab directory:
//!
//! ```text
//! {output}/
//! ├── i_Investigation.txt                                          # Investigation file
//! ├── s_{experiment}.txt                                           # Sample sheet
//! └── a_{experiment}_transcription_profiling_nucleotide_sequencing.txt   # Assay sheet
//! ```
//!
//! Sheets are tab-separated with no quoting; a field containing a tab or a
//! line break is refused rather than escaped. Every file is written to a
//! temporary file next to its destination and renamed into place, so a
//! file is either complete or absent.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use isasheet::metadata::StudyDesign;
//! use isasheet::writer::{write_isatab, WriteOptions};
//!
//! let study = StudyDesign::new("organoids")
//!     .with_samples(["D0-1", "D7-1"])
//!     .with_organism_name("Homo sapiens");
//!
//! let summary = write_isatab("isa_organoids", &study, &WriteOptions::default())?;
//! println!("Wrote {} files", summary.files.len());
//! # Ok::<(), isasheet::writer::WriterError>(())
//! ```

mod error;
mod investigation;
mod layout;
mod tsv;


pub use error::WriterError;
pub use investigation::InvestigationFile;
pub use layout::{write_isatab, IsaTabLayout, WriteOptions, WriteSummary};
pub use tsv::{table_to_string, write_atomically, write_table_file, TsvWriter};
