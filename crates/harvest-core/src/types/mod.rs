//! Core data types for the harvest pipeline.

pub mod package;

// Re-export all public types
pub use package::{is_archive_name, DownloadedPackage, ARCHIVE_SUFFIX};
