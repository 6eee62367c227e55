//! # Main — CLI Entry Point
//!
//! Routes CLI subcommands to the library: `eval` loads and evaluates one
//! TOML instance file with a component breakdown, `sweep` exhaustively
//! enumerates the input domain for a width/slot-count pair. Shared
//! concerns handled here: structured logging setup and the rayon thread
//! pool configuration.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "falsum",
    about = "Evaluate the always-false Pratt-certificate predicate"
)]
struct Cli {
    /// Number of rayon worker threads for sweeps (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Emit machine-readable JSON instead of the human-readable report
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single instance from a TOML file
    Eval {
        /// Path to the instance file
        #[arg(long)]
        instance: PathBuf,
    },
    /// Exhaustively evaluate every tuple in the bounded input domain
    Sweep {
        /// Bit width W of every value (1..=63; sweeps are capped at 2^40 tuples)
        #[arg(long)]
        width: u32,
        /// Number of candidate-prime slots N
        #[arg(long)]
        slots: usize,
    },
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for harness capture, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);

    match &cli.command {
        Commands::Eval { instance } => cli::run_eval(instance, cli.json),
        Commands::Sweep { width, slots } => cli::run_sweep(*width, *slots, cli.json),
    }
}
