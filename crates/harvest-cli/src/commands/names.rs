//! `harvest names` command implementation.
//!
//! Fetches the top N names from the listing and prints them, one per line,
//! without touching the workspace.

use harvest_core::error::{HarvestError, HarvestResult};
use harvest_registry::{fetch_top_names, BrowseClient};

use super::CommandContext;

/// Execute the `harvest names` command
pub async fn execute(count: usize, ctx: &CommandContext) -> HarvestResult<()> {
    if count < 1 {
        return Err(HarvestError::invalid_argument(
            "count must be a number of at least 1",
        ));
    }

    let registry = BrowseClient::new(ctx.config.registry.url.clone())?;
    let names = fetch_top_names(&registry, count).await?;

    for (rank, name) in names.iter().enumerate() {
        println!("{:>4}  {}", rank + 1, name);
    }

    Ok(())
}
