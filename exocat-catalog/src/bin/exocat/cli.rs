//! CLI argument definitions for exocat

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exocat")]
#[command(about = "Fill gaps in exoplanet catalogs with propagated uncertainties")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a gap-filling pipeline over a CSV catalog
    Fill(FillArgs),

    /// Look up effective temperatures for spectral classes
    Spectral(SpectralArgs),

    /// Print the steps of a pipeline without running it
    Steps(StepsArgs),
}

#[derive(Parser)]
pub struct FillArgs {
    /// Input catalog CSV
    #[arg(long)]
    pub input: PathBuf,

    /// Output catalog CSV
    #[arg(long)]
    pub output: PathBuf,

    /// Pipeline TOML; the standard pipeline when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SpectralArgs {
    /// Spectral types, e.g. G2V K1.5 M
    #[arg(required = true)]
    pub classes: Vec<String>,
}

#[derive(Parser)]
pub struct StepsArgs {
    /// Pipeline TOML; the standard pipeline when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration as TOML instead
    #[arg(long)]
    pub toml: bool,
}
