use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(version, about = "Personal calendar event manager")]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Opaque credential token (falls back to the MYCAL_TOKEN environment
    /// variable)
    #[clap(long)]
    pub token: Option<String>,

    /// Start with an empty store instead of the demo events
    #[clap(long)]
    pub no_seed: bool,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the mycal application
    #[clap(subcommand)]
    pub command: Commands,
}
