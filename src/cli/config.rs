//! TOML configuration file support.
//!
//! Instead of passing every value as a flag, a study can be described in a
//! config file; command-line values take precedence:
//!
//! ```toml
//! # isasheet.toml
//! [study]
//! experiment_name = "organoid_timecourse"
//! organism = "Homo sapiens"
//! source_type = "iPSC"
//! model_type = "organoid"
//! samples = ["D0-1", "D7-1"]
//!
//! [library]
//! kit = "Chromium Next GEM Single Cell 3' v3.1"
//! type = "3'"
//!
//! [columns]
//! source_characteristics = ["genotype"]
//! dissociation_parameters = ["enzyme"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use isasheet::sheets::StageColumns;

/// Root configuration structure for isasheet.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Study identity and shared annotations.
    #[serde(default)]
    pub study: StudyConfig,

    /// Library preparation settings.
    #[serde(default)]
    pub library: LibraryConfig,

    /// Extra columns per workflow stage.
    #[serde(default)]
    pub columns: StageColumns,
}

/// The `[study]` table.
#[derive(Debug, Default, Deserialize)]
pub struct StudyConfig {
    /// Experiment name, also used in file names.
    pub experiment_name: Option<String>,

    /// Organism name (e.g., "Homo sapiens").
    pub organism: Option<String>,

    /// Ontology source of the organism term; looked up for known organisms when omitted.
    pub organism_term_source: Option<String>,

    /// Accession of the organism term; looked up for known organisms when omitted.
    pub organism_accession: Option<String>,

    /// Kind of source material.
    pub source_type: Option<String>,

    /// Kind of model system.
    pub model_type: Option<String>,

    /// Sample identifiers.
    #[serde(default)]
    pub samples: Vec<String>,
}

/// The `[library]` table.
#[derive(Debug, Default, Deserialize)]
pub struct LibraryConfig {
    /// Library preparation kit.
    pub kit: Option<String>,

    /// Library type.
    #[serde(rename = "type")]
    pub library_type: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
