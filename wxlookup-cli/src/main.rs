//! Binary crate for the `wxlookup` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive lookup loop and configuration prompts
//! - Human-friendly, coloured output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod interactive;
mod output;

const DEFAULT_LOG_FILTER: &str = "wxlookup_core=info,warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
