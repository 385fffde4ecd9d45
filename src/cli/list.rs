//! List command implementation

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use batchpick::batch::{BatchInfoMap, scan_batch_folders, sort_batches_with};
use batchpick::config::Config;

/// One batch as printed by `list --json`
#[derive(Debug, Serialize)]
pub struct BatchListing {
    pub name: String,
    pub required: bool,
    pub file_count: usize,
    pub path: PathBuf,
}

/// Batches in merge order
pub fn listings(batches: &BatchInfoMap, required: &str) -> Vec<BatchListing> {
    sort_batches_with(batches.keys().cloned(), required)
        .into_iter()
        .filter_map(|name| {
            let info = batches.get(&name)?;
            Some(BatchListing {
                required: name == required,
                file_count: info.file_count,
                path: info.path.clone(),
                name,
            })
        })
        .collect()
}

/// Print the batches found under `work_dir`
pub fn list_command(work_dir: &Path, config: &Config, json: bool) -> Result<()> {
    let required = config.dialog().required_batch.as_str();
    let batches = scan_batch_folders(work_dir, required)?;
    let listings = listings(&batches, required);

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("No batches found.");
        return Ok(());
    }

    println!("Found {} batch(es):\n", listings.len());
    for listing in &listings {
        let marker = if listing.required { " (required)" } else { "" };
        println!(
            "  {}{}  {} files",
            listing.name, marker, listing.file_count
        );
    }

    Ok(())
}
