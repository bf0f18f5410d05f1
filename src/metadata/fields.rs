/// Organism name (`Characteristics[Organism]`)
pub const ORGANISM: &str = "organism";
/// Ontology source of the organism term
pub const ORGANISM_TERM_SOURCE: &str = "organism_term_source";
/// Accession of the organism term
pub const ORGANISM_ACCESSION: &str = "organism_accession";
/// Experiment name
pub const EXPERIMENT_NAME: &str = "experiment_name";
/// Kind of source material (e.g., "iPSC")
pub const SOURCE_TYPE: &str = "source_type";
/// Kind of model system (e.g., "organoid")
pub const MODEL_TYPE: &str = "model_type";
/// Library preparation kit
pub const LIBRARY_KIT: &str = "library_kit";
/// Library type (e.g., "3'")
pub const LIBRARY_TYPE: &str = "library_type";
