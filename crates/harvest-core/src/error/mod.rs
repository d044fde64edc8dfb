//! Error types and result aliases for harvest operations.
//!
//! Provides a unified error type covering every failure class of the
//! download pipeline, with actionable error messages.

use thiserror::Error;

/// Unified error type for all harvest operations
#[derive(Error, Debug)]
pub enum HarvestError {
    // Raised synchronously, before any I/O
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // Directory listing, stat, create, or delete failure
    #[error("Filesystem operation failed on {path}: {message}")]
    Filesystem {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    // Listing page request failure
    #[error("Registry request failed: {message}")]
    Registry {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // External fetch subprocess failure
    #[error("Failed to download '{package}': {message}")]
    Download { package: String, message: String },

    // Archive extraction or target-directory-creation failure
    #[error("Failed to unpack '{package}': {message}")]
    Unpack {
        package: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for harvest operations
pub type HarvestResult<T> = Result<T, HarvestError>;

impl HarvestError {
    /// Create an invalid-argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a filesystem error from std::io::Error
    pub fn filesystem(
        path: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a registry error from any error type
    pub fn registry<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Registry {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a registry error without an underlying cause
    pub fn registry_status(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
            source: None,
        }
    }

    /// Create a download error for a named package
    pub fn download(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Create an unpack error for a named package
    pub fn unpack(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unpack {
            package: package.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an unpack error carrying the underlying IO failure
    pub fn unpack_io(
        package: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Unpack {
            package: package.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            HarvestError::InvalidArgument { .. } => {
                Some("Pass a package count of at least 1")
            },
            HarvestError::Registry { .. } => {
                Some("Check your internet connection and the registry URL, then try again")
            },
            HarvestError::Download { .. } => {
                Some("Make sure the packaging tool is installed and on your PATH")
            },
            HarvestError::Unpack { .. } => {
                Some("Run 'harvest clean' to reset the workspace and try again")
            },
            _ => None,
        }
    }
}
