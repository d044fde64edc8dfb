//! Path validation for archive extraction.
//!
//! Archive entry paths come from untrusted tarballs; an entry must never be
//! able to write outside the extraction directory.

use std::path::{Component, Path, PathBuf};

/// Check that an archive entry path stays inside the extraction directory.
///
/// Rejects absolute paths and any use of `..`; `.` components are harmless
/// and allowed.
pub fn is_safe_entry_path(path: &Path) -> bool {
    if path.is_absolute() {
        return false;
    }

    path.components().all(|component| {
        matches!(component, Component::Normal(_) | Component::CurDir)
    })
}

/// Rebuild an entry path from its normal components only.
///
/// Drops `.` components so the result can be joined onto the extraction
/// directory directly. Callers must have validated the path first.
pub fn normal_components(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name),
            _ => None,
        })
        .collect()
}
