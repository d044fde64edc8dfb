//! Package fetch, extraction, and workspace cleanup for harvest
//!
//! This crate owns everything that touches the workspace directory:
//! - `fetch`: invoking the external packaging tool to download one archive
//! - `tarball`: unpacking an archive into a fresh package directory
//! - `clean`: removing workspace entries, with the reserved marker spared

pub mod clean;
pub mod fetch;
pub mod tarball;

// Re-export main types
pub use clean::{clean_all, clean_archives, clean_workspace};
pub use fetch::{download_package, NpmPack, PackTool};
pub use tarball::unpack;

use harvest_core::error::HarvestError;

/// Result type for packaging operations
pub type PackResult<T> = Result<T, HarvestError>;
