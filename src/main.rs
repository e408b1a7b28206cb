// linesieve - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (exactly one positional input path)
// 2. Logging initialisation (debug mode support)
// 3. Running the pipeline and mapping failures to diagnostics and exit codes

use clap::error::ErrorKind;
use clap::Parser;
use linesieve::app::pipeline;
use linesieve::core::model::ScanConfig;
use linesieve::util::{self, constants, error::LineSieveError};
use std::io;
use std::path::PathBuf;
use std::process;

/// linesieve - filter TILE0 L1.5 trace lines and report 'Received' runs.
///
/// Writes every line containing "TILE0 L1.5 th" to filtered_output.txt in
/// the working directory, then prints each run of three or more
/// consecutive "Received" lines with its starting line number.
#[derive(Parser, Debug)]
#[command(name = "linesieve", version, about)]
struct Cli {
    /// Text log file to filter. Names starting with '-' are accepted;
    /// only -d/--debug, -h/--help and -V/--version keep their meaning.
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", constants::USAGE);
            process::exit(constants::EXIT_USAGE);
        }
    };

    util::logging::init(cli.debug);

    tracing::debug!(
        version = constants::APP_VERSION,
        input = %cli.input.display(),
        "linesieve starting"
    );

    let result = {
        let mut stdout = io::stdout().lock();
        pipeline::run(&cli.input, &ScanConfig::default(), &mut stdout)
    };

    match result {
        Ok(summary) => {
            tracing::debug!(?summary, "Finished");
        }
        Err(e @ LineSieveError::InputNotFound { .. }) => {
            tracing::debug!(input = %cli.input.display(), "Input file not found");
            println!("Error: {e}");
            process::exit(constants::EXIT_FAILURE);
        }
        Err(e) => {
            tracing::error!(error = %e, "linesieve failed");
            eprintln!("Error: {e}");
            process::exit(constants::EXIT_FAILURE);
        }
    }
}
