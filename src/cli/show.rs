use anyhow::{Context, Result};

use isasheet::sheets::SheetKind;
use isasheet::writer::table_to_string;

use super::StudyArgs;

/// Print one sheet to stdout
pub fn run(sheet: SheetKind, json: bool, study: StudyArgs) -> Result<()> {
    let design = study.resolve()?;
    let table = design
        .table(sheet)
        .with_context(|| format!("Failed to build the {} sheet", sheet))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", table_to_string(&table)?);
    }

    Ok(())
}
