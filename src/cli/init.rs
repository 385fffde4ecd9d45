//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use batchpick::config::Config;

/// Default configuration content for batchpick init
pub const DEFAULT_CONFIG: &str = r#"# batchpick configuration
# =======================
#
# Settings for the batch selection dialog shown before a merge.

[settings.dialog]
# Batch that is always merged and cannot be unchecked
required_batch = "REGULAR"

# Dialog geometry (points). The dialog is base_height + row_height per batch
# tall, capped at max_height; the checklist scrolls past list_max_height.
width = 500.0
base_height = 250.0
row_height = 35.0
max_height = 700.0
list_max_height = 300.0
"#;

/// Write the default configuration file
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
