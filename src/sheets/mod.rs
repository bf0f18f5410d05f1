//! # Stem-Cell Single-Cell Sheet Layouts
//!
//! The two sheets of a single-cell transcriptomics study:
//!
//! - **Sample sheet** (`s_*.txt`): source material, its organism and model
//!   annotations, the sample collection step and the resulting samples.
//! - **Assay sheet** (`a_*.txt`): dissociation, library construction and
//!   sequencing of each sample.
//!
//! Both sheets link through the normalized sample identifier in their
//! `Sample Name` columns. Each stage exposes a slot for caller-configured
//! columns; see [`StageColumns`].

mod stages;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metadata::fields;
use crate::schema::{columns, ColumnSpec};

pub use stages::StageColumns;

/// Slot names of the built-in layouts
pub mod slots {
    /// Characteristics of the source material, after `Characteristics[Model type]`
    pub const SOURCE_CHARACTERISTICS: &str = "source_characteristics";
    /// Characteristics of the sample, after `Sample Name`
    pub const SAMPLE_CHARACTERISTICS: &str = "sample_characteristics";
    /// Parameters of the dissociation step
    pub const DISSOCIATION_PARAMETERS: &str = "dissociation_parameters";
    /// Parameters of the library construction step
    pub const LIBRARY_PARAMETERS: &str = "library_parameters";
    /// Parameters of the sequencing step
    pub const SEQUENCING_PARAMETERS: &str = "sequencing_parameters";
}

/// Protocol names referenced from `Protocol REF` columns
pub mod protocols {
    /// Sample collection, sample sheet
    pub const SAMPLE_COLLECTION: &str = "Sample collection";
    /// Tissue or culture dissociation into single cells
    pub const DISSOCIATION: &str = "Dissociation";
    /// Library construction
    pub const LIBRARY_CONSTRUCTION: &str = "Library construction";
    /// Sequencing
    pub const NUCLEIC_ACID_SEQUENCING: &str = "Nucleic acid sequencing";

    /// All protocols with their ISA protocol types, in workflow order
    pub const ALL: [(&str, &str); 4] = [
        (SAMPLE_COLLECTION, "sample collection"),
        (DISSOCIATION, "dissociation"),
        (LIBRARY_CONSTRUCTION, "library construction"),
        (NUCLEIC_ACID_SEQUENCING, "nucleic acid sequencing"),
    ];
}

/// Suffix appended to the sample name to form the gene-expression extract name
pub const EXTRACT_SUFFIX: &str = "_GEX";

/// Which of the two sheets to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// Study-level sample sheet
    Sample,
    /// Assay sheet
    Assay,
}

impl SheetKind {
    /// Column spec of this sheet
    pub fn spec(&self) -> ColumnSpec {
        match self {
            SheetKind::Sample => sample_sheet_spec(),
            SheetKind::Assay => assay_sheet_spec(),
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Sample => write!(f, "sample"),
            SheetKind::Assay => write!(f, "assay"),
        }
    }
}

/// Column spec of the sample sheet
pub fn sample_sheet_spec() -> ColumnSpec {
    ColumnSpec::new()
        .sample_name(columns::SOURCE_NAME)
        .shared(&columns::characteristics("Organism"), fields::ORGANISM)
        .shared(columns::TERM_SOURCE_REF, fields::ORGANISM_TERM_SOURCE)
        .shared(columns::TERM_ACCESSION_NUMBER, fields::ORGANISM_ACCESSION)
        .shared(&columns::characteristics("Experiment"), fields::EXPERIMENT_NAME)
        .shared(&columns::characteristics("Source type"), fields::SOURCE_TYPE)
        .shared(&columns::characteristics("Model type"), fields::MODEL_TYPE)
        .slot(slots::SOURCE_CHARACTERISTICS)
        .literal(columns::PROTOCOL_REF, protocols::SAMPLE_COLLECTION)
        .empty(columns::PERFORMER)
        .empty(columns::DATE)
        .sample_name(columns::SAMPLE_NAME)
        .slot(slots::SAMPLE_CHARACTERISTICS)
}

/// Column spec of the assay sheet
pub fn assay_sheet_spec() -> ColumnSpec {
    ColumnSpec::new()
        .sample_name(columns::SAMPLE_NAME)
        .literal(columns::PROTOCOL_REF, protocols::DISSOCIATION)
        .slot(slots::DISSOCIATION_PARAMETERS)
        .empty(columns::PERFORMER)
        .empty(columns::DATE)
        .sample_name_with_suffix(columns::EXTRACT_NAME, EXTRACT_SUFFIX)
        .literal(columns::PROTOCOL_REF, protocols::LIBRARY_CONSTRUCTION)
        .shared(&columns::parameter_value("Library kit"), fields::LIBRARY_KIT)
        .shared(&columns::parameter_value("Library type"), fields::LIBRARY_TYPE)
        .slot(slots::LIBRARY_PARAMETERS)
        .empty(columns::PERFORMER)
        .empty(columns::DATE)
        .sample_name(columns::LIBRARY_NAME)
        .literal(columns::PROTOCOL_REF, protocols::NUCLEIC_ACID_SEQUENCING)
        .slot(slots::SEQUENCING_PARAMETERS)
        .empty(columns::PERFORMER)
        .empty(columns::DATE)
        .empty(columns::RAW_DATA_FILE)
}
