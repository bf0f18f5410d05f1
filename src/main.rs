//! # isasheet
//!
//! Command-line front end for generating ISA-Tab sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Write i_Investigation.txt, s_*.txt and a_*.txt into ./isa
//! isasheet generate isa --experiment organoids --organism "Homo sapiens" \
//!     --sample D0-1 --sample D7-1
//!
//! # Same inputs from a config file, printing the assay sheet as JSON
//! isasheet show assay --config isasheet.toml --json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
