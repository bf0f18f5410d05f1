//! Study inputs shared by `generate` and `show`.

use anyhow::{bail, Context, Result};
use clap::Args;
use log::debug;
use std::path::{Path, PathBuf};

use isasheet::controlled_vocabulary::OntologyTerm;
use isasheet::metadata::StudyDesign;

use super::config::Config;

#[derive(Args, Debug, Default)]
pub struct StudyArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Experiment name
    #[arg(short, long)]
    experiment: Option<String>,

    /// Organism (e.g., "Homo sapiens")
    #[arg(long)]
    organism: Option<String>,

    /// Source type (e.g., "iPSC")
    #[arg(long)]
    source_type: Option<String>,

    /// Model type (e.g., "organoid")
    #[arg(long)]
    model_type: Option<String>,

    /// Library preparation kit
    #[arg(long)]
    library_kit: Option<String>,

    /// Library type
    #[arg(long)]
    library_type: Option<String>,

    /// Sample identifier (repeatable)
    #[arg(short, long = "sample", value_name = "ID")]
    samples: Vec<String>,

    /// File with one sample identifier per line
    #[arg(long, value_name = "FILE")]
    samples_file: Option<PathBuf>,
}

impl StudyArgs {
    /// Merge the flags over the configuration file into a study design.
    pub fn resolve(self) -> Result<StudyDesign> {
        let config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        self.merge(config)
    }

    fn merge(self, config: Config) -> Result<StudyDesign> {
        let study = config.study;
        let library = config.library;

        let Some(experiment_name) = self.experiment.or(study.experiment_name) else {
            bail!("No experiment name given; use --experiment or [study] experiment_name");
        };

        let mut samples = self.samples;
        if let Some(path) = &self.samples_file {
            samples.extend(read_samples_file(path)?);
        }
        if samples.is_empty() {
            samples = study.samples;
        }
        debug!("{} sample(s) for '{}'", samples.len(), experiment_name);

        let mut design = StudyDesign::new(&experiment_name)
            .with_samples(samples)
            .with_stages(config.columns);

        match (self.organism, study.organism) {
            (Some(name), _) => design = design.with_organism_name(&name),
            (None, Some(name)) => {
                design = match (study.organism_term_source, study.organism_accession) {
                    (Some(source), Some(accession)) => {
                        design.with_organism(OntologyTerm::new(&name, &source, &accession))
                    }
                    _ => design.with_organism_name(&name),
                }
            }
            (None, None) => {}
        }

        if let Some(source_type) = self.source_type.or(study.source_type) {
            design = design.with_source_type(&source_type);
        }
        if let Some(model_type) = self.model_type.or(study.model_type) {
            design = design.with_model_type(&model_type);
        }
        if let Some(kit) = self.library_kit.or(library.kit) {
            design = design.with_library_kit(&kit);
        }
        if let Some(library_type) = self.library_type.or(library.library_type) {
            design = design.with_library_type(&library_type);
        }

        Ok(design)
    }
}

/// Read sample identifiers from a file, skipping blank lines and `#` comments.
pub fn read_samples_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples file: {}", path.display()))?;
    Ok(parse_samples(&content))
}

fn parse_samples(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
