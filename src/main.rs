//! # qcimport CLI
//!
//! A command-line tool for importing tab-separated QC export files and
//! re-emitting them as CSV or JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Import a TIC trace and print it as CSV
//! qcimport tic tic_trace.tsv
//!
//! # Import a peptide identification table as JSON
//! qcimport id identifications.tsv --json -o identifications.json
//!
//! # Show the declared schema of a format
//! qcimport info id
//! ```

use anyhow::Result;
use clap::Parser;

use qcimport::formats::{IdFormat, TicFormat};

mod cli;

use cli::{Cli, Commands, FormatArg};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Tic { args } => cli::import::run_import(TicFormat::new(), args),
        Commands::Id { args } => cli::import::run_import(IdFormat::new(), args),
        Commands::Info { format } => match format {
            FormatArg::Tic => cli::info::run_info(TicFormat::new()),
            FormatArg::Id => cli::info::run_info(IdFormat::new()),
        },
    }
}
