//! # Floorwise CLI Application
//!
//! Terminal-based interface for flooring cost estimates. Walks the user
//! through rooms, crew, and pricing with line prompts, then prints the cost
//! report produced by `floor_core`.

mod prompt;
mod session;

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::prompt::Prompter;
use crate::session::SessionOptions;

/// Interactive flooring installation cost estimator
#[derive(Debug, Parser)]
#[command(name = "floor_cli", version, about)]
struct Args {
    /// Also print the cost breakdown as JSON
    #[arg(long)]
    json: bool,

    /// Skip the review screen before calculating
    #[arg(long)]
    no_review: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = SessionOptions {
        review: !args.no_review,
        json: args.json,
    };
    tracing::debug!(?options, "starting session");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    session::run(&mut prompter, options)
}
