use chrono::{Local, NaiveDate};
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::tsv::{table_to_string, write_atomically};
use super::{InvestigationFile, WriterError};
use crate::metadata::StudyDesign;
use crate::table::{normalize_identifier, TableError};

/// File names of an ISA-Tab directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IsaTabLayout {
    /// Investigation file name
    pub investigation: String,
    /// Sample sheet file name
    pub study: String,
    /// Assay sheet file name
    pub assay: String,
}

impl IsaTabLayout {
    /// Name of the investigation file
    pub const INVESTIGATION_FILE: &'static str = "i_Investigation.txt";

    /// File names for an experiment
    ///
    /// The experiment name is normalized like a sample identifier, and
    /// whitespace and path separators are replaced by underscores.
    pub fn for_experiment(experiment_name: &str) -> Result<Self, WriterError> {
        let stem: String = normalize_identifier(experiment_name)
            .map_err(|e| match e {
                TableError::InvalidIdentifier { reason, .. } => WriterError::InvalidExperimentName {
                    name: experiment_name.to_string(),
                    reason,
                },
                other => WriterError::TableError(other),
            })?
            .chars()
            .map(|c| if c.is_whitespace() || c == '/' || c == '\\' { '_' } else { c })
            .collect();

        Ok(Self {
            investigation: Self::INVESTIGATION_FILE.to_string(),
            study: format!("s_{}.txt", stem),
            assay: format!("a_{}_transcription_profiling_nucleotide_sequencing.txt", stem),
        })
    }

    /// Full paths of the three files inside `dir`, investigation first
    pub fn paths(&self, dir: &Path) -> [PathBuf; 3] {
        [
            dir.join(&self.investigation),
            dir.join(&self.study),
            dir.join(&self.assay),
        ]
    }
}

/// Options for [`write_isatab`]
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Replace existing files instead of failing
    pub overwrite: bool,
    /// Submission date for the investigation file (defaults to today)
    pub submission_date: Option<NaiveDate>,
}

/// What [`write_isatab`] produced
#[derive(Debug, Clone, Serialize)]
pub struct WriteSummary {
    /// Output directory
    pub directory: PathBuf,
    /// Files written, investigation first
    pub files: Vec<PathBuf>,
    /// Number of samples (rows per sheet)
    pub sample_count: usize,
    /// Number of columns of the sample sheet
    pub sample_columns: usize,
    /// Number of columns of the assay sheet
    pub assay_columns: usize,
}

/// Generate both sheets and the investigation file and write them to `dir`
///
/// Everything is generated and rendered before the first file is touched:
/// an invalid sample identifier, a malformed column group or an existing
/// file (without `overwrite`) leaves the directory unchanged.
pub fn write_isatab<P: AsRef<Path>>(
    dir: P,
    study: &StudyDesign,
    options: &WriteOptions,
) -> Result<WriteSummary, WriterError> {
    let dir = dir.as_ref();
    let layout = IsaTabLayout::for_experiment(&study.experiment_name)?;
    let sheets = study.build_sheets()?;

    let date = options
        .submission_date
        .unwrap_or_else(|| Local::now().date_naive());
    let investigation = InvestigationFile::for_study(study, &layout, date).render()?;
    let sample = table_to_string(&sheets.sample)?;
    let assay = table_to_string(&sheets.assay)?;

    let paths = layout.paths(dir);
    if !options.overwrite {
        if let Some(existing) = paths.iter().find(|p| p.exists()) {
            return Err(WriterError::AlreadyExists(existing.clone()));
        }
    }

    std::fs::create_dir_all(dir)?;
    for (path, contents) in paths.iter().zip([&investigation, &sample, &assay]) {
        write_atomically(path, contents.as_bytes())?;
        info!("Wrote {}", path.display());
    }

    Ok(WriteSummary {
        directory: dir.to_path_buf(),
        files: paths.to_vec(),
        sample_count: sheets.sample.len(),
        sample_columns: sheets.sample.width(),
        assay_columns: sheets.assay.width(),
    })
}
