//! Command implementations and dispatch logic.
//!
//! Each command is an async function taking a [`CommandContext`] that
//! carries the loaded configuration and the output handler.

use tracing::info;

use harvest_config::Config;
use harvest_core::error::{HarvestError, HarvestResult};

pub mod clean;
pub mod download;
pub mod names;


use crate::output::OutputHandler;
use crate::Commands;

/// Shared context for all commands
pub struct CommandContext {
    pub config: Config,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context from a loaded configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: OutputHandler::new(),
        }
    }

    /// Make sure the workspace directory exists before a command touches it
    pub fn ensure_workspace(&self) -> HarvestResult<()> {
        let dir = &self.config.workspace.dir;
        std::fs::create_dir_all(dir).map_err(|e| {
            HarvestError::filesystem(
                dir.display().to_string(),
                "failed to create workspace directory",
                e,
            )
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> HarvestResult<()> {
    match command {
        Commands::Download { count } => {
            info!(count, "downloading top packages");
            download::execute(count, ctx).await
        },
        Commands::Names { count } => {
            info!(count, "fetching top package names");
            names::execute(count, ctx).await
        },
        Commands::Clean { archives } => {
            info!(archives, "cleaning workspace");
            clean::execute(archives, ctx).await
        },
    }
}
