use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use isasheet::writer::{write_isatab, WriteOptions};

use super::StudyArgs;

/// Write the investigation, sample and assay files for a study
pub fn run(output: PathBuf, force: bool, study: StudyArgs) -> Result<()> {
    let design = study.resolve()?;

    info!("Generating ISA-Tab for '{}'", design.experiment_name);
    info!("Output: {}", output.display());

    let options = WriteOptions {
        overwrite: force,
        ..Default::default()
    };
    let summary = write_isatab(&output, &design, &options)
        .with_context(|| format!("Failed to write ISA-Tab files to {}", output.display()))?;

    let message = format!(
        "{} sample(s), {} sample columns, {} assay columns -> {}",
        summary.sample_count,
        summary.sample_columns,
        summary.assay_columns,
        summary.directory.display()
    );

    #[cfg(feature = "colorized_output")]
    {
        println!("{} {}", style("✓").green().bold(), message);
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("OK {}", message);
    }

    Ok(())
}
