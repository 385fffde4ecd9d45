//! Configuration loading and management

mod io;
mod settings;

pub use settings::{DialogSettings, Settings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Shortcut for the dialog section
    pub fn dialog(&self) -> &DialogSettings {
        &self.settings.dialog
    }
}
