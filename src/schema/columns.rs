/// Column labels as constants for type safety
/// Name of the biological source material
pub const SOURCE_NAME: &str = "Source Name";
/// Name of the sample; links study and assay sheets
pub const SAMPLE_NAME: &str = "Sample Name";
/// Name of the extract derived from a sample
pub const EXTRACT_NAME: &str = "Extract Name";
/// Name of the sequencing library
pub const LIBRARY_NAME: &str = "Library Name";
/// Raw data file produced by the assay
pub const RAW_DATA_FILE: &str = "Raw Data File";
/// Reference to a protocol declared in the investigation file
pub const PROTOCOL_REF: &str = "Protocol REF";
/// Person who performed the preceding protocol step
pub const PERFORMER: &str = "Performer";
/// Date the preceding protocol step was performed
pub const DATE: &str = "Date";
/// Ontology source of the preceding annotated column
pub const TERM_SOURCE_REF: &str = "Term Source REF";
/// Ontology accession of the preceding annotated column
pub const TERM_ACCESSION_NUMBER: &str = "Term Accession Number";

/// Label prefix of characteristics columns
pub const CHARACTERISTICS: &str = "Characteristics";
/// Label prefix of protocol parameter columns
pub const PARAMETER_VALUE: &str = "Parameter Value";

/// Format a `Characteristics[<name>]` label
pub fn characteristics(name: &str) -> String {
    format!("{}[{}]", CHARACTERISTICS, name)
}

/// Format a `Parameter Value[<name>]` label
pub fn parameter_value(name: &str) -> String {
    format!("{}[{}]", PARAMETER_VALUE, name)
}
