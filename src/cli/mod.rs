use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use isasheet::sheets::SheetKind;

mod config;
mod generate;
mod inputs;
mod show;

pub use inputs::StudyArgs;

/// isasheet - ISA-Tab sheet generator for stem-cell single-cell studies
#[derive(Parser)]
#[command(name = "isasheet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Sheet selector for the show command.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SheetArg {
    /// Sample sheet (s_*.txt)
    Sample,
    /// Assay sheet (a_*.txt)
    Assay,
}

impl From<SheetArg> for SheetKind {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::Sample => SheetKind::Sample,
            SheetArg::Assay => SheetKind::Assay,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the investigation, sample and assay files into a directory
    Generate {
        /// Output directory (created if missing)
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        #[command(flatten)]
        study: StudyArgs,
    },

    /// Print one sheet to stdout
    Show {
        /// Which sheet to print
        #[arg(value_enum)]
        sheet: SheetArg,

        /// Print the table as JSON instead of tab-separated text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        study: StudyArgs,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            output,
            force,
            study,
        } => generate::run(output, force, study),
        Commands::Show { sheet, json, study } => show::run(SheetKind::from(sheet), json, study),
    }
}
