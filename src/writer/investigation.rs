use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{IsaTabLayout, WriterError};
use crate::controlled_vocabulary::{ontology_source, OntologySource};
use crate::metadata::StudyDesign;
use crate::sheets::protocols;

/// Measurement type declared for the assay
pub const MEASUREMENT_TYPE: &str = "transcription profiling";
/// Technology type declared for the assay
pub const TECHNOLOGY_TYPE: &str = "nucleotide sequencing";

/// A protocol declared in the study section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyProtocol {
    /// Name referenced from `Protocol REF` columns
    pub name: String,
    /// Protocol type
    pub protocol_type: String,
    /// Parameter names, matching the sheets' `Parameter Value[...]` columns
    pub parameters: Vec<String>,
}

/// Minimal investigation file describing one study with one assay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationFile {
    /// Investigation and study identifier
    pub identifier: String,
    /// Investigation and study title
    pub title: String,
    /// Submission date
    pub submission_date: NaiveDate,
    /// Ontologies referenced by the sheets
    pub ontology_sources: Vec<OntologySource>,
    /// File name of the sample sheet
    pub study_file: String,
    /// File name of the assay sheet
    pub assay_file: String,
    /// Protocols in workflow order
    pub protocols: Vec<StudyProtocol>,
}

impl InvestigationFile {
    /// Describe a study laid out in `layout`
    pub fn for_study(study: &StudyDesign, layout: &IsaTabLayout, submission_date: NaiveDate) -> Self {
        let ontology_sources = study
            .organism
            .as_ref()
            .filter(|o| o.is_annotated())
            .map(|o| {
                ontology_source(&o.term_source)
                    .unwrap_or_else(|| OntologySource::named(&o.term_source))
            })
            .into_iter()
            .collect();

        let stages = &study.stages;
        let protocols = protocols::ALL
            .iter()
            .map(|(name, protocol_type)| {
                let parameters = match *name {
                    protocols::DISSOCIATION => stages.dissociation_parameters.clone(),
                    protocols::LIBRARY_CONSTRUCTION => {
                        let mut params = vec!["Library kit".to_string(), "Library type".to_string()];
                        params.extend(stages.library_parameters.iter().cloned());
                        params
                    }
                    protocols::NUCLEIC_ACID_SEQUENCING => stages.sequencing_parameters.clone(),
                    _ => Vec::new(),
                };
                StudyProtocol {
                    name: name.to_string(),
                    protocol_type: protocol_type.to_string(),
                    parameters,
                }
            })
            .collect();

        Self {
            identifier: study.experiment_name.clone(),
            title: study.experiment_name.clone(),
            submission_date,
            ontology_sources,
            study_file: layout.study.clone(),
            assay_file: layout.assay.clone(),
            protocols,
        }
    }

    /// Render the investigation file
    pub fn render(&self) -> Result<String, WriterError> {
        let date = self.submission_date.format("%Y-%m-%d").to_string();
        let mut out = Section::default();

        out.heading("ONTOLOGY SOURCE REFERENCE");
        out.line("Term Source Name", self.ontology_sources.iter().map(|s| s.name.as_str()))?;
        out.line("Term Source File", self.ontology_sources.iter().map(|s| s.file.as_str()))?;
        out.line("Term Source Version", self.ontology_sources.iter().map(|s| s.version.as_str()))?;
        out.line(
            "Term Source Description",
            self.ontology_sources.iter().map(|s| s.description.as_str()),
        )?;

        out.heading("INVESTIGATION");
        out.line("Investigation Identifier", [self.identifier.as_str()])?;
        out.line("Investigation Title", [self.title.as_str()])?;
        out.line("Investigation Description", [""])?;
        out.line("Investigation Submission Date", [date.as_str()])?;
        out.line("Investigation Public Release Date", [""])?;

        out.heading("STUDY");
        out.line("Study Identifier", [self.identifier.as_str()])?;
        out.line("Study Title", [self.title.as_str()])?;
        out.line("Study Description", [""])?;
        out.line("Study Submission Date", [date.as_str()])?;
        out.line("Study Public Release Date", [""])?;
        out.line("Study File Name", [self.study_file.as_str()])?;

        out.heading("STUDY ASSAYS");
        out.line("Study Assay File Name", [self.assay_file.as_str()])?;
        out.line("Study Assay Measurement Type", [MEASUREMENT_TYPE])?;
        out.line("Study Assay Technology Type", [TECHNOLOGY_TYPE])?;
        out.line("Study Assay Technology Platform", [""])?;

        out.heading("STUDY PROTOCOLS");
        out.line("Study Protocol Name", self.protocols.iter().map(|p| p.name.as_str()))?;
        out.line("Study Protocol Type", self.protocols.iter().map(|p| p.protocol_type.as_str()))?;
        let parameters: Vec<String> = self.protocols.iter().map(|p| p.parameters.join(";")).collect();
        out.line("Study Protocol Parameters Name", parameters.iter().map(String::as_str))?;

        out.heading("STUDY CONTACTS");
        for key in [
            "Study Person Last Name",
            "Study Person First Name",
            "Study Person Email",
            "Study Person Affiliation",
            "Study Person Roles",
        ] {
            out.line(key, [""])?;
        }

        Ok(out.text)
    }
}

#[derive(Default)]
struct Section {
    text: String,
}

impl Section {
    fn heading(&mut self, name: &str) {
        self.text.push_str(name);
        self.text.push('\n');
    }

    fn line<'a, I>(&mut self, key: &str, values: I) -> Result<(), WriterError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.text.push_str(key);
        for value in values {
            if value.contains(['\t', '\n', '\r']) {
                return Err(WriterError::UnrepresentableField {
                    column: key.to_string(),
                    value: value.to_string(),
                });
            }
            self.text.push('\t');
            self.text.push('"');
            self.text.push_str(&value.replace('"', "\"\""));
            self.text.push('"');
        }
        self.text.push('\n');
        Ok(())
    }
}
