//! `harvest download` command implementation.
//!
//! Runs the full pipeline: reset the workspace, fetch the top names,
//! download every archive in parallel, unpack them in parallel, then sweep
//! the leftover archives.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use harvest_config::Config;
use harvest_core::error::{HarvestError, HarvestResult};
use harvest_core::types::DownloadedPackage;
use harvest_core::utils::concurrent::try_map_concurrent;
use harvest_pack::fetch::{download_package, NpmPack, PackTool};
use harvest_pack::{clean_all, clean_archives, tarball};
use harvest_registry::{fetch_top_names, BrowseClient};

use super::CommandContext;

/// Execute the `harvest download` command
pub async fn execute(count: usize, ctx: &CommandContext) -> HarvestResult<()> {
    let start = Instant::now();
    ctx.ensure_workspace()?;

    ctx.output
        .step(&format!("Downloading the top {} packages", count));

    let registry = BrowseClient::new(ctx.config.registry.url.clone())?;
    let tool: Arc<dyn PackTool> = Arc::new(NpmPack::new(ctx.config.tool.program.clone()));

    let packages = run_pipeline(count, &registry, tool, &ctx.config).await?;

    if packages.len() < count {
        ctx.output.warn(&format!(
            "the listing only yielded {} packages",
            packages.len()
        ));
    }

    ctx.output.success(&format!(
        "Unpacked {} packages into {} in {:.2}s",
        packages.len(),
        ctx.config.workspace.dir.display(),
        start.elapsed().as_secs_f64()
    ));
    Ok(())
}

/// Run the five pipeline stages in order.
///
/// Each stage is gated on the previous one completing; the first error
/// observed stops the run and is returned as-is. No stage retries and no
/// rollback happens on failure: a failed run may leave a partially
/// populated workspace, which the unconditional clean at the start of the
/// next run resets.
pub async fn run_pipeline(
    count: usize,
    registry: &BrowseClient,
    tool: Arc<dyn PackTool>,
    config: &Config,
) -> HarvestResult<Vec<DownloadedPackage>> {
    // Enforced before any I/O
    if count < 1 {
        return Err(HarvestError::invalid_argument(
            "count must be a number of at least 1",
        ));
    }

    let workspace = config.workspace.dir.clone();
    let marker = config.workspace.marker.as_str();

    // Stage 1: reset the workspace
    clean_all(&workspace, marker).await?;

    // Stage 2: fetch the top names
    let names = fetch_top_names(registry, count).await?;
    info!(found = names.len(), "fetched package names");

    // Stage 3: download all archives in parallel
    let downloaded = {
        let workspace = workspace.clone();
        try_map_concurrent(names, move |name| {
            let tool = tool.clone();
            let workspace = workspace.clone();
            async move { download_package(tool.as_ref(), &workspace, &name).await }
        })
        .await?
    };
    info!(count = downloaded.len(), "all archives fetched");

    // Stage 4: unpack every archive in parallel
    {
        let workspace = workspace.clone();
        try_map_concurrent(downloaded.clone(), move |package| {
            let workspace = workspace.clone();
            async move { tarball::unpack(&workspace, &package) }
        })
        .await?;
    }
    info!("all archives unpacked");

    // Stage 5: sweep the leftover archives, keeping the unpacked directories
    clean_archives(&workspace, marker).await?;

    Ok(downloaded)
}
