//! Command-line interface for heatprops.
//!
//! `heatprops <input_json> <output_json>` reads a material file, annotates
//! every record with heat properties and writes the result. Any other
//! positional count prints the usage line and exits with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use crate::config::Settings;
use crate::core::{annotate_collection, read_collection, write_collection};
use crate::error::{Result, EXIT_IO, EXIT_USAGE};

/// Usage line printed on a bad invocation
pub const USAGE: &str = "Usage: heatprops <input_json> <output_json>";

/// heatprops - Annotate material records with combustion heat properties
#[derive(Parser, Debug)]
#[command(name = "heatprops")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Material JSON file to read
    pub input: PathBuf,

    /// Destination for the annotated JSON
    pub output: PathBuf,

    /// Classify and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (defaults to .heatprops/config.yaml in this or a parent directory)
    #[arg(short, long, env = "HEATPROPS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Execute the annotation run
    pub fn execute(&self, settings: &Settings) -> Result<()> {
        let mut materials = read_collection(&self.input, settings.max_input_bytes)?;
        let summary = annotate_collection(&mut materials)?;

        if self.dry_run {
            print!("{summary}");
            info!(output = %self.output.display(), "Dry run, output not written");
            return Ok(());
        }

        write_collection(&self.output, &materials)
    }
}

/// Turn a clap parse failure into the process outcome.
///
/// Help and version requests print normally; anything else is a usage
/// error reported on stdout.
pub fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            ExitCode::from(print_status(err.print()))
        }
        kind => {
            eprintln!("error: {kind}");
            println!("{USAGE}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Exit status for a help/version write
fn print_status(result: std::io::Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => EXIT_IO,
    }
}
