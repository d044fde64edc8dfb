//! # harvest-core
//!
//! Core types and utilities shared across all harvest crates.
//!
//! This crate provides:
//! - `HarvestError` enum for unified error handling
//! - `DownloadedPackage`, the record passed from the downloader to the unpacker
//! - A generic order-preserving concurrent-map primitive used by every
//!   fan-out stage of the pipeline
//! - Path validation helpers for archive extraction

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{HarvestError, HarvestResult};
pub use types::{DownloadedPackage, ARCHIVE_SUFFIX};
pub use utils::concurrent::try_map_concurrent;
