//! exocat: exoplanet catalog gap filling
//!
//! Derives missing catalog quantities with asymmetric error propagation
//! and writes the completed catalog back out as CSV.

mod cli;
mod fill;
mod spectral;
mod steps;

use clap::Parser;
use cli::{Cli, Commands};
use exocat_catalog::PipelineConfig;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    register_logger(cli.verbose);

    match &cli.command {
        Commands::Fill(args) => fill::run(args, &cli),
        Commands::Spectral(args) => spectral::run(args),
        Commands::Steps(args) => steps::run(args),
    }
}

fn register_logger(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let log_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Configuration from `path`, or the standard pipeline.
fn load_config(path: Option<&Path>) -> anyhow::Result<PipelineConfig> {
    use anyhow::Context;

    match path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load pipeline config {:?}", path)),
        None => Ok(PipelineConfig::standard()),
    }
}
