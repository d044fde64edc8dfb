//! Archive fetch via the external packaging tool.
//!
//! The registry's own tool already knows how to resolve a package name to
//! its distributable archive, so downloading shells out to it rather than
//! reimplementing that logic. The subprocess sits behind the [`PackTool`]
//! trait so tests can substitute a fake.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use harvest_core::error::HarvestError;
use harvest_core::types::DownloadedPackage;

use crate::PackResult;

/// Boundary to the external packaging tool
#[async_trait]
pub trait PackTool: Send + Sync {
    /// Fetch `name`'s archive into `workspace` and return the archive
    /// filename the tool reported.
    async fn pack(&self, name: &str, workspace: &Path) -> PackResult<String>;
}

/// The real packaging tool, invoked as `<program> pack <name>`
#[derive(Debug, Clone)]
pub struct NpmPack {
    program: String,
}

impl NpmPack {
    /// Create a tool wrapper around the given program name or path
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl PackTool for NpmPack {
    async fn pack(&self, name: &str, workspace: &Path) -> PackResult<String> {
        let output = Command::new(&self.program)
            .arg("pack")
            .arg(name)
            .current_dir(workspace)
            .output()
            .await
            .map_err(|e| {
                HarvestError::download(name, format!("failed to run {}: {}", self.program, e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let detail = stderr.trim();
            let message = if detail.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                format!("{} exited with {}: {}", self.program, output.status, detail)
            };
            return Err(HarvestError::download(name, message));
        }

        // Deprecation notices and similar warnings land on stderr without a
        // failing exit code; they must not fail the download.
        if !stderr.trim().is_empty() {
            warn!(package = name, "{}", stderr.trim());
        }

        // The tool may print informational lines first; the archive filename
        // is the last non-empty stdout line.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let file_name = stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .unwrap_or_default();

        if file_name.is_empty() {
            return Err(HarvestError::download(
                name,
                format!("{} did not report an archive filename", self.program),
            ));
        }

        Ok(file_name)
    }
}

/// Download one package's archive into the workspace.
///
/// Side effect: one new archive file in the workspace, whose name is
/// recorded in the returned [`DownloadedPackage`].
pub async fn download_package(
    tool: &dyn PackTool,
    workspace: &Path,
    name: &str,
) -> PackResult<DownloadedPackage> {
    if name.is_empty() {
        return Err(HarvestError::invalid_argument(
            "package name must not be empty",
        ));
    }

    debug!(package = name, "fetching archive");
    let file_name = tool.pack(name, workspace).await?;
    debug!(package = name, file = %file_name, "archive fetched");

    Ok(DownloadedPackage::new(name, file_name))
}
