//! Command-line interface for gridrank
//! Reads a puzzle from stdin and prints the rank of every token as a 5x5 grid.
//!
//! Input:
//!   line 1: the puzzle level (1, 2 or 3)
//!   line 2: 25 whitespace-separated tokens
//!
//! Usage:
//!   gridrank [--config `<path>`] [--style `<style>`] [--verbose]  < puzzle.txt

mod error;
mod logging;
mod run;

use clap::{builder::PossibleValuesParser, Arg, ArgAction, ArgMatches, Command};
use gridrank_config::{GridrankConfig, Loader};
use gridrank_core::{Grid, OutputStyle};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::error::CliError;

fn main() -> ExitCode {
    let matches = Command::new("gridrank")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rank the 25 tokens of a grid puzzle read from stdin")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .short('s')
                .help("Output style for the solved grid")
                .value_parser(PossibleValuesParser::new(OutputStyle::NAMES)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };
    logging::init(matches.get_flag("verbose"), &config.logging.filter);

    let stdin = io::stdin();
    let result = run::solve_from_reader(stdin.lock())
        .and_then(|grid| print_grid(&grid, config.output.style));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

/// Build the configuration: defaults, then `gridrank.toml`, then `--config`, then `--style`.
fn load_config(matches: &ArgMatches) -> Result<GridrankConfig, CliError> {
    let mut loader = Loader::default().with_local_file();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(style) = matches.get_one::<String>("style") {
        loader = loader.with_output_style(style)?;
    }
    Ok(loader.build()?)
}

/// Write the rendered grid to stdout.
fn print_grid(grid: &Grid, style: OutputStyle) -> Result<(), CliError> {
    let lines = grid.render(style)?;
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

/// Print the single error line for a failed run.
fn report(error: &CliError) -> ExitCode {
    tracing::debug!(?error, "run failed");
    println!("{}", error.report_line());
    ExitCode::FAILURE
}
