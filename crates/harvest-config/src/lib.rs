//! Configuration loading for harvest
//!
//! This crate parses the optional `harvest.toml` file and provides defaults
//! for every setting, so a bare checkout runs without any configuration.
//! The workspace directory, ignore-marker file, registry URL, and packaging
//! tool program are all threaded through the pipeline from here; no
//! component hardcodes a path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use harvest_core::error::{HarvestError, HarvestResult};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, HarvestError>;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "harvest.toml";

/// Complete harvest configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Workspace directory settings
    #[serde(default)]
    pub workspace: WorkspaceSection,

    /// Registry endpoint settings
    #[serde(default)]
    pub registry: RegistrySection,

    /// External packaging tool settings
    #[serde(default)]
    pub tool: ToolSection,
}

/// Workspace directory section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSection {
    /// Directory holding downloaded archives and unpacked packages
    #[serde(default = "default_workspace_dir")]
    pub dir: PathBuf,

    /// Reserved marker file that the cleaner never deletes
    #[serde(default = "default_marker")]
    pub marker: String,
}

/// Registry endpoint section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySection {
    /// Base URL of the registry website serving the depended-upon listing
    #[serde(default = "default_registry_url")]
    pub url: String,
}

/// External packaging tool section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSection {
    /// Program invoked as `<program> pack <name>` to fetch an archive
    #[serde(default = "default_tool_program")]
    pub program: String,
}

fn default_workspace_dir() -> PathBuf {
    PathBuf::from("packages")
}

fn default_marker() -> String {
    ".gitignore".to_string()
}

fn default_registry_url() -> String {
    "https://www.npmjs.com".to_string()
}

fn default_tool_program() -> String {
    "npm".to_string()
}

impl Default for WorkspaceSection {
    fn default() -> Self {
        Self {
            dir: default_workspace_dir(),
            marker: default_marker(),
        }
    }
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
        }
    }
}

impl Default for ToolSection {
    fn default() -> Self {
        Self {
            program: default_tool_program(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| {
            HarvestError::invalid_argument(format!("failed to parse configuration: {}", e))
        })
    }

    /// Load a configuration file from disk
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarvestError::filesystem(
                path.display().to_string(),
                "failed to read configuration file",
                e,
            )
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the given file, or fall back to `harvest.toml` in the current
    /// directory if present, or the built-in defaults otherwise.
    ///
    /// An explicitly named file must exist; the implicit lookup is optional.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(explicit) => Self::load(explicit),
            None => {
                let implicit = Path::new(CONFIG_FILE);
                if implicit.exists() {
                    Self::load(implicit)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }
}
