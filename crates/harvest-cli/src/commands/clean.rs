//! `harvest clean` command implementation.

use harvest_core::error::HarvestResult;
use harvest_pack::{clean_all, clean_archives};

use super::CommandContext;

/// Execute the `harvest clean` command
pub async fn execute(archives: bool, ctx: &CommandContext) -> HarvestResult<()> {
    ctx.ensure_workspace()?;

    let dir = &ctx.config.workspace.dir;
    let marker = ctx.config.workspace.marker.as_str();

    if archives {
        clean_archives(dir, marker).await?;
        ctx.output.success("Removed leftover archives");
    } else {
        clean_all(dir, marker).await?;
        ctx.output.success("Workspace cleaned");
    }

    Ok(())
}
