//! Most-depended-upon listing client for harvest
//!
//! This crate fetches the registry website's paginated "most depended upon"
//! listing over HTTP, extracts package names from the returned markup, and
//! assembles the top-N name list that drives the download pipeline.

pub mod client;
pub mod listing;
pub mod scrape;

// Re-export main types
pub use client::BrowseClient;
pub use listing::{fetch_top_names, page_offsets, PAGE_SIZE};
pub use scrape::extract_names;

use harvest_core::error::HarvestError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, HarvestError>;
