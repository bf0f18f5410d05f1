//! # Ontology Terms
//!
//! ISA-Tab annotates free-text characteristics with an ontology reference: a
//! `Term Source REF` column naming the ontology and a `Term Accession Number`
//! column holding the term's accession. This module provides a small typed
//! representation of such terms and the organism terms used by stem-cell
//! studies.
//!
//! ## Reference
//! - NCBI Taxonomy on BioPortal: https://bioportal.bioontology.org/ontologies/NCBITAXON

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ontology term with the source it was taken from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OntologyTerm {
    /// Human-readable term name (e.g., "Homo sapiens")
    pub name: String,
    /// Term source REF, matching an ontology source of the investigation (e.g., "NCBITAXON")
    pub term_source: String,
    /// Term accession number, usually a resolvable IRI
    pub accession: String,
}

impl OntologyTerm {
    /// Create a new ontology term
    pub fn new(name: &str, term_source: &str, accession: &str) -> Self {
        Self {
            name: name.to_string(),
            term_source: term_source.to_string(),
            accession: accession.to_string(),
        }
    }

    /// A term carrying only a name, without an ontology reference
    pub fn free_text(name: &str) -> Self {
        Self::new(name, "", "")
    }

    /// Whether the term references an ontology
    pub fn is_annotated(&self) -> bool {
        !self.term_source.is_empty() && !self.accession.is_empty()
    }
}

impl fmt::Display for OntologyTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_annotated() {
            write!(f, "{} [{}: {}]", self.name, self.term_source, self.accession)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Description of an ontology referenced from the investigation file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologySource {
    /// Name used in `Term Source REF` columns
    pub name: String,
    /// Location of the ontology
    pub file: String,
    /// Ontology version, empty when unpinned
    pub version: String,
    /// Free-text description
    pub description: String,
}

impl OntologySource {
    /// A source known only by name, with empty file, version and description
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            file: String::new(),
            version: String::new(),
            description: String::new(),
        }
    }
}

/// Look up the description of a known ontology by its source name
pub fn ontology_source(name: &str) -> Option<OntologySource> {
    match name {
        organisms::NCBITAXON => Some(OntologySource {
            name: organisms::NCBITAXON.to_string(),
            file: "http://data.bioontology.org/ontologies/NCBITAXON".to_string(),
            version: String::new(),
            description: "National Center for Biotechnology Information (NCBI) Organismal Classification"
                .to_string(),
        }),
        _ => None,
    }
}

/// Organism terms from the NCBI Taxonomy
pub mod organisms {
    use super::OntologyTerm;

    /// Term source name of the NCBI Taxonomy
    pub const NCBITAXON: &str = "NCBITAXON";

    const NCBITAXON_PREFIX: &str = "http://purl.bioontology.org/ontology/NCBITAXON/";

    fn taxon(name: &str, id: u32) -> OntologyTerm {
        OntologyTerm::new(name, NCBITAXON, &format!("{}{}", NCBITAXON_PREFIX, id))
    }

    /// NCBITaxon:9606 - Homo sapiens
    pub fn homo_sapiens() -> OntologyTerm {
        taxon("Homo sapiens", 9606)
    }

    /// NCBITaxon:10090 - Mus musculus
    pub fn mus_musculus() -> OntologyTerm {
        taxon("Mus musculus", 10090)
    }

    /// Resolve an organism by scientific or common name (case-insensitive)
    pub fn lookup(name: &str) -> Option<OntologyTerm> {
        match name.trim().to_lowercase().as_str() {
            "homo sapiens" | "human" => Some(homo_sapiens()),
            "mus musculus" | "mouse" => Some(mus_musculus()),
            _ => None,
        }
    }
}
