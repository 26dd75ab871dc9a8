use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod import;
pub mod info;

/// qcimport - QC Export File Importer
#[derive(Parser)]
#[command(name = "qcimport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a TIC trace export (two double columns)
    Tic {
        #[command(flatten)]
        args: ImportArgs,
    },

    /// Import a peptide identification table export (twelve columns)
    Id {
        #[command(flatten)]
        args: ImportArgs,
    },

    /// Print the declared schema of a format
    Info {
        /// Which format to describe
        #[arg(value_enum, value_name = "FORMAT")]
        format: FormatArg,
    },
}

/// Shared arguments of the import subcommands.
#[derive(Args)]
pub struct ImportArgs {
    /// Input TSV file path
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit JSON instead of CSV
    #[arg(long)]
    pub json: bool,

    /// Silently ignore additional columns in the file header
    #[arg(long)]
    pub ignore_extra_columns: bool,
}

/// The QC export formats the CLI knows about.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Total-ion-current trace
    Tic,
    /// Peptide identification table
    Id,
}
