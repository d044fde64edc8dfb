//! Workspace cleanup.
//!
//! Used twice per pipeline run: once up front to reset the workspace, and
//! once at the end to remove leftover archives while keeping the unpacked
//! package directories.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use harvest_core::error::HarvestError;
use harvest_core::types::is_archive_name;
use harvest_core::utils::concurrent::try_map_concurrent;

use crate::PackResult;

/// Remove workspace entries whose names match `filter`.
///
/// The reserved `marker` file is always spared. Each retained entry is
/// classified before removal: directories are deleted recursively, files
/// directly. Removals run in parallel; the first failure is surfaced after
/// the in-flight ones finish, with no rollback.
pub async fn clean_workspace<F>(dir: &Path, marker: &str, filter: F) -> PackResult<()>
where
    F: Fn(&str) -> bool,
{
    let mut entries = fs::read_dir(dir).await.map_err(|e| {
        HarvestError::filesystem(dir.display().to_string(), "failed to list workspace", e)
    })?;

    let mut targets: Vec<PathBuf> = Vec::new();
    loop {
        let entry = entries.next_entry().await.map_err(|e| {
            HarvestError::filesystem(dir.display().to_string(), "failed to read workspace entry", e)
        })?;
        let Some(entry) = entry else { break };

        let name = entry.file_name().to_string_lossy().into_owned();
        if name == marker || !filter(&name) {
            continue;
        }
        targets.push(entry.path());
    }

    debug!(count = targets.len(), "removing workspace entries");

    try_map_concurrent(targets, |path| async move {
        remove_entry(&path).await
    })
    .await?;

    Ok(())
}

/// Remove everything from the workspace except the marker file
pub async fn clean_all(dir: &Path, marker: &str) -> PackResult<()> {
    clean_workspace(dir, marker, |_| true).await
}

/// Remove only leftover archives, preserving unpacked package directories
pub async fn clean_archives(dir: &Path, marker: &str) -> PackResult<()> {
    clean_workspace(dir, marker, is_archive_name).await
}

/// Classify one entry and delete it with the matching operation
async fn remove_entry(path: &Path) -> PackResult<()> {
    let metadata = fs::metadata(path).await.map_err(|e| {
        HarvestError::filesystem(
            path.display().to_string(),
            "failed to stat workspace entry",
            e,
        )
    })?;

    if metadata.is_dir() {
        debug!(path = %path.display(), "removing directory");
        fs::remove_dir_all(path).await.map_err(|e| {
            HarvestError::filesystem(path.display().to_string(), "failed to remove directory", e)
        })
    } else {
        debug!(path = %path.display(), "removing file");
        fs::remove_file(path).await.map_err(|e| {
            HarvestError::filesystem(path.display().to_string(), "failed to remove file", e)
        })
    }
}
