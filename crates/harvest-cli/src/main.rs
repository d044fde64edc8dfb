//! # harvest-cli
//!
//! Command-line tool that downloads the top N most-depended-upon packages
//! from the registry, unpacks each into the workspace directory, and sweeps
//! leftover archives afterward.
//!
//! This is the entry point: it parses arguments, sets up logging, loads the
//! configuration, and dispatches to the command handlers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use harvest_config::Config;
use harvest_core::error::HarvestResult;

mod commands;
mod output;

use commands::CommandContext;

/// Download the registry's most depended-upon packages
#[derive(Parser)]
#[command(name = "harvest", version, about = "Download the registry's most depended-upon packages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a harvest.toml configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download and unpack the top N packages
    Download {
        /// How many packages to fetch
        count: usize,
    },
    /// Print the top N package names without downloading anything
    Names {
        /// How many names to fetch
        count: usize,
    },
    /// Clean the workspace directory
    Clean {
        /// Only remove leftover archives, keeping unpacked packages
        #[arg(long)]
        archives: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(error) = run_cli(cli).await {
        output::render_error(&error);
        std::process::exit(1);
    }
}

async fn run_cli(cli: Cli) -> HarvestResult<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let ctx = CommandContext::new(config);
    commands::dispatch_command(cli.command, &ctx).await
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "harvest={level},harvest_core={level},harvest_registry={level},harvest_pack={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
