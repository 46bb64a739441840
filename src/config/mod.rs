//! Configuration loading and management

mod settings;

pub use settings::{DataSettings, ServerSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rewards::RewardDefinition;

/// Main configuration structure (`fundboard.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP API settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Data source settings
    #[serde(default)]
    pub data: DataSettings,

    /// Reward catalog override ([[reward]] entries). Empty means the
    /// built-in catalog.
    #[serde(default)]
    pub reward: Vec<RewardDefinition>,
}

impl Config {
    /// Get the global data directory path (~/.fundboard/)
    pub fn global_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fundboard")
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory.
    /// Looks for: `fundboard.toml` in the directory, then
    /// `~/.fundboard/config.toml`, then falls back to defaults.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = dir.join("fundboard.toml");
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_data_dir().join("config.toml");
        if global_path.exists() {
            return Self::from_file(&global_path);
        }

        Ok(Self::default())
    }

    /// Resolved database path.
    pub fn db_path(&self) -> PathBuf {
        self.data
            .db_path
            .clone()
            .unwrap_or_else(|| Self::global_data_dir().join("fundboard.db"))
    }

    /// The configured reward catalog, or None to use the data source's.
    pub fn reward_catalog(&self) -> Option<Vec<RewardDefinition>> {
        if self.reward.is_empty() {
            None
        } else {
            Some(self.reward.clone())
        }
    }
}
