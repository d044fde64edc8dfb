//! Package records passed between pipeline stages.

use serde::{Deserialize, Serialize};

/// File suffix of the archives produced by the packaging tool
pub const ARCHIVE_SUFFIX: &str = ".tgz";

/// A package that has been fetched into the workspace.
///
/// Pairs the requested registry name with the on-disk archive filename the
/// packaging tool reported. Produced by the downloader, consumed by the
/// unpacker; `file_name` must reference an archive present in the workspace
/// at the moment unpack runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedPackage {
    /// Registry-unique package name, also the unpack target directory name
    pub name: String,
    /// Archive filename inside the workspace
    pub file_name: String,
}

impl DownloadedPackage {
    /// Create a new record from a package name and the tool-reported filename
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
        }
    }
}

/// Check whether a workspace entry name looks like a leftover archive
pub fn is_archive_name(name: &str) -> bool {
    name.ends_with(ARCHIVE_SUFFIX)
}
