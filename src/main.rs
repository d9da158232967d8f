//! Keyscope - cryptanalysis-support CLI
//!
//! Kasiski key-length estimation for repeating-key polyalphabetic ciphers and
//! character-frequency language identification, all local and in-memory.

use anyhow::Result;
use clap::Parser;
use keyscope::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // RUST_LOG wins over --log-level when set
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    cli::run(args)
}
