//! nsjoin CLI
//!
//! Joins the network namespace of a running process and reports the result.

use clap::Parser;
use std::process;

mod cli;
mod commands;
mod diagnostics;
mod logging;

use cli::Cli;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, &cli.log) {
        eprintln!("Error: {e}");
        process::exit(diagnostics::EXIT_FAILURE);
    }

    if let Err(e) = commands::dispatch(cli.command) {
        eprintln!("Error: {e:#}");
        if let Some(hint) = diagnostics::hint(&e) {
            eprintln!("  {hint}");
        }
        process::exit(diagnostics::exit_code(&e));
    }
}
