//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.batchpick/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".batchpick")
    }

    /// Get the global config file path (~/.batchpick/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The lock file sits next to the config so the rename never races a
    /// second writer; the parent directory is created if needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }

    /// Load global configuration from ~/.batchpick/config.toml
    /// If no config exists, one is written with defaults first.
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();

        if !global_path.exists() {
            Self::with_defaults().save_to_file(&global_path)?;
            tracing::info!("[batchpick] Created {}", global_path.display());
        }

        Self::from_file(&global_path)
    }

    /// Resolve the config to use for a run.
    ///
    /// An explicit path must parse; the global config falls back to defaults
    /// with a warning when it cannot be read or written.
    pub fn resolve(config_override: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_override {
            return Self::from_file(path);
        }

        match Self::load() {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "[batchpick] Failed to load config ({}): {:#}. Falling back to defaults.",
                    Self::global_config_path().display(),
                    e
                );
                Ok(Self::with_defaults())
            }
        }
    }
}
