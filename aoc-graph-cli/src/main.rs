//! AOC Graph CLI - inspect and repair page-ordering rules

mod cli;
mod commands;
mod error;
mod input;

use std::io::{self, Write};

use clap::Parser;
use cli::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let raw = input::read_input(args.input_file.as_deref())?;
    let manual = input::parse(&raw)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(args.command, &manual, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Installs the log subscriber; logs go to stderr, results to stdout
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("AOC_GRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "aoc_graph=debug,aoc_graph_cli=debug,info"
        } else {
            "aoc_graph=info,aoc_graph_cli=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}
