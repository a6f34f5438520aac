//! `langevin`: 2D Brownian motion under the Langevin equation.
//!
//! ```text
//! langevin sample <n> [--seed S]
//! langevin simulate [T] [m] [gamma] [dt] [n_steps] [--seed S] [--strict] [--csv PATH] [--config FILE]
//! langevin ensemble [T] [m] [gamma] [dt] [n_steps] [--runs K] [--fit-from T0] [--seed S]
//! ```
//!
//! Data goes to stdout; logs go to stderr (`-v`, `-vv`, or `RUST_LOG`).

mod cli;
mod commands;
mod logging;


use std::io;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let stdout = io::stdout().lock();
    match &cli.command {
        Command::Sample(args) => commands::sample(args, stdout),
        Command::Simulate(args) => commands::simulate(args, stdout),
        Command::Ensemble(args) => commands::ensemble(args, stdout),
    }
}
