//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    import::ImportArgs,
    inspect::InspectArgs,
    parts::PartsArgs,
};

#[derive(Parser)]
#[command(name = "cranelog")]
#[command(version, about = "Crane maintenance-log toolkit")]
#[command(long_about = "Converts crane maintenance-log workbooks into a JSON record store \
and runs keyword-based part analytics over it.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dump sheet names and leading rows of workbooks for manual inspection
    Inspect(InspectArgs),

    /// Convert the mechanical and electrical repair-log workbooks into the JSON store
    Import(ImportArgs),

    /// Rank part repair/replacement frequency from the store
    Parts(PartsArgs),
}
