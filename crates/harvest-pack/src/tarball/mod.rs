//! Archive extraction into package directories.

pub mod extract;

pub use extract::extract_stripped;

use std::fs::File;
use std::path::Path;

use tracing::debug;

use harvest_core::error::HarvestError;
use harvest_core::types::DownloadedPackage;

use crate::PackResult;

/// Unpack a downloaded archive into `workspace/<name>`.
///
/// The target directory is created fresh and must not already exist; the
/// caller is expected to have cleaned the workspace first. The archive's
/// single wrapper folder is stripped so the package contents land directly
/// in the target. The source archive is left in place; removing it is a
/// separate cleanup step.
pub fn unpack(workspace: &Path, package: &DownloadedPackage) -> PackResult<()> {
    let target = workspace.join(&package.name);
    std::fs::create_dir(&target).map_err(|e| {
        HarvestError::unpack_io(
            &package.name,
            format!("failed to create {}", target.display()),
            e,
        )
    })?;

    let archive_path = workspace.join(&package.file_name);
    let archive = File::open(&archive_path).map_err(|e| {
        HarvestError::unpack_io(
            &package.name,
            format!("failed to open {}", archive_path.display()),
            e,
        )
    })?;

    debug!(package = %package.name, archive = %package.file_name, "extracting");
    extract_stripped(archive, &target, &package.name)
}
