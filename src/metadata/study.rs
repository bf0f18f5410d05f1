use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::fields;
use crate::controlled_vocabulary::{organisms, OntologyTerm};
use crate::sheets::{SheetKind, StageColumns};
use crate::table::{SharedFields, Table, TableBuilder, TableError};

/// Everything needed to generate the sheets of one study
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDesign {
    /// Experiment name
    pub experiment_name: String,

    /// Raw sample identifiers, in output order
    pub samples: Vec<String>,

    /// Organism with its ontology reference
    pub organism: Option<OntologyTerm>,

    /// Kind of source material
    pub source_type: Option<String>,

    /// Kind of model system
    pub model_type: Option<String>,

    /// Library preparation kit
    pub library_kit: Option<String>,

    /// Library type
    pub library_type: Option<String>,

    /// Extra columns per workflow stage
    #[serde(default)]
    pub stages: StageColumns,
}

/// Both sheets of a study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheets {
    /// Sample sheet
    pub sample: Table,
    /// Assay sheet
    pub assay: Table,
}

impl StudyDesign {
    /// Create a study with the given experiment name and no samples
    pub fn new(experiment_name: &str) -> Self {
        Self {
            experiment_name: experiment_name.to_string(),
            ..Default::default()
        }
    }

    /// Set the sample identifiers
    pub fn with_samples<I, S>(mut self, samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.samples = samples.into_iter().map(Into::into).collect();
        self
    }

    /// Set the organism term
    pub fn with_organism(mut self, organism: OntologyTerm) -> Self {
        self.organism = Some(organism);
        self
    }

    /// Set the organism by name, resolving known organisms to their ontology term
    pub fn with_organism_name(self, name: &str) -> Self {
        let term = organisms::lookup(name).unwrap_or_else(|| {
            warn!(
                "Organism '{}' is not a known NCBI Taxonomy term; leaving the ontology reference empty",
                name
            );
            OntologyTerm::free_text(name)
        });
        self.with_organism(term)
    }

    /// Set the source type
    pub fn with_source_type(mut self, source_type: &str) -> Self {
        self.source_type = Some(source_type.to_string());
        self
    }

    /// Set the model type
    pub fn with_model_type(mut self, model_type: &str) -> Self {
        self.model_type = Some(model_type.to_string());
        self
    }

    /// Set the library kit
    pub fn with_library_kit(mut self, library_kit: &str) -> Self {
        self.library_kit = Some(library_kit.to_string());
        self
    }

    /// Set the library type
    pub fn with_library_type(mut self, library_type: &str) -> Self {
        self.library_type = Some(library_type.to_string());
        self
    }

    /// Set the extra stage columns
    pub fn with_stages(mut self, stages: StageColumns) -> Self {
        self.stages = stages;
        self
    }

    /// Shared field values repeated on every row
    pub fn shared_fields(&self) -> SharedFields {
        let organism = self.organism.as_ref();
        SharedFields::new()
            .with(fields::EXPERIMENT_NAME, self.experiment_name.as_str())
            .with_opt(fields::ORGANISM, organism.map(|o| o.name.as_str()))
            .with_opt(
                fields::ORGANISM_TERM_SOURCE,
                organism.map(|o| o.term_source.as_str()),
            )
            .with_opt(
                fields::ORGANISM_ACCESSION,
                organism.map(|o| o.accession.as_str()),
            )
            .with_opt(fields::SOURCE_TYPE, self.source_type.as_deref())
            .with_opt(fields::MODEL_TYPE, self.model_type.as_deref())
            .with_opt(fields::LIBRARY_KIT, self.library_kit.as_deref())
            .with_opt(fields::LIBRARY_TYPE, self.library_type.as_deref())
    }

    /// Table builder for one sheet
    pub fn builder(&self, kind: SheetKind) -> Result<TableBuilder, TableError> {
        TableBuilder::new(
            &kind.spec(),
            &self.stages.groups_for(kind),
            self.shared_fields(),
        )
    }

    /// Build one sheet
    pub fn table(&self, kind: SheetKind) -> Result<Table, TableError> {
        debug!(
            "Building {} sheet for '{}' with {} samples",
            kind,
            self.experiment_name,
            self.samples.len()
        );
        self.builder(kind)?.build_table(&self.samples)
    }

    /// Build the sample sheet
    pub fn sample_table(&self) -> Result<Table, TableError> {
        self.table(SheetKind::Sample)
    }

    /// Build the assay sheet
    pub fn assay_table(&self) -> Result<Table, TableError> {
        self.table(SheetKind::Assay)
    }

    /// Build both sheets; either both succeed or neither is returned
    pub fn build_sheets(&self) -> Result<Sheets, TableError> {
        Ok(Sheets {
            sample: self.sample_table()?,
            assay: self.assay_table()?,
        })
    }
}
