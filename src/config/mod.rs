//! Configuration system for previous-edit.
//!
//! Only two settings persist between sessions: how deep the backward history
//! may grow and whether same-line cursor reports are coalesced. Location
//! history itself is never saved. Configuration is stored as TOML.
//!
//! # Example
//!
//! ```
//! use previous_edit::config::{Config, MINIMUM_BACKWARD};
//!
//! let config = Config::default();
//! assert_eq!(config.max_backward, MINIMUM_BACKWARD);
//! assert!(config.coalesce_same_line);
//!
//! // Values below the minimum are raised to it
//! let small = Config {
//!     max_backward: 3,
//!     ..Config::default()
//! };
//! assert_eq!(small.effective_max_backward(), MINIMUM_BACKWARD);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Smallest allowed backward history depth, also the default.
pub const MINIMUM_BACKWARD: usize = 10;

/// Persisted settings for previous-edit.
///
/// # Fields
///
/// * `max_backward` - Maximum number of backward history entries (default and minimum: 10)
/// * `coalesce_same_line` - Merge cursor reports on the line just left into the current location (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of backward history entries
    #[serde(default = "default_max_backward")]
    pub max_backward: usize,

    /// Merge same-line cursor reports instead of pushing history
    #[serde(default = "default_coalesce_same_line")]
    pub coalesce_same_line: bool,
}

/// Returns the default backward history depth.
fn default_max_backward() -> usize {
    MINIMUM_BACKWARD
}

/// Returns the default coalescing policy.
fn default_coalesce_same_line() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_backward: default_max_backward(),
            coalesce_same_line: default_coalesce_same_line(),
        }
    }
}

impl Config {
    /// The backward depth actually used, never below [`MINIMUM_BACKWARD`].
    pub fn effective_max_backward(&self) -> usize {
        self.max_backward.max(MINIMUM_BACKWARD)
    }

    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/previous-edit/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("previous-edit");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            warn!(path = %config_path.display(), "ignoring config: {:#}", err);
            Self::default()
        })
    }

    /// Loads configuration from `path`.
    ///
    /// A `max_backward` below the minimum is raised to it.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.max_backward = config.effective_max_backward();
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
