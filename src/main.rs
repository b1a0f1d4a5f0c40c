//! BIBSnet CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: note the start time, parse args, run the
//! predictor, and exit with the status the run produced.
//! For programmatic use, prefer the library API (`bibsnet::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let started = chrono::Local::now();
    let args = cli::CliArgs::parse();
    cli::run(args, started)
}
