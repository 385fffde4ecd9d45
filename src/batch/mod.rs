//! Batch data model
//!
//! A batch is a named group of data files that can be fed into a merge.
//! One batch (by default `REGULAR`) is mandatory; `EXTRA<n>` batches are optional.

mod scan;
mod sort;

pub use scan::{ScanError, scan_batch_folders};
pub use sort::{BatchKind, batch_kind, sort_batches, sort_batches_with};

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Name of the batch that must always take part in a merge
pub const REQUIRED_BATCH: &str = "REGULAR";

/// Metadata about a single batch
///
/// The selection dialog only cares that an entry exists; the fields are
/// filled in by the folder scanner and shown by the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInfo {
    /// Folder the batch was discovered in
    pub path: PathBuf,
    /// Number of regular files directly inside the folder
    pub file_count: usize,
    /// Last modification time of the folder, if the platform reports one
    #[serde(default)]
    pub modified: Option<DateTime<Local>>,
}

/// Batch name -> metadata
pub type BatchInfoMap = BTreeMap<String, BatchInfo>;
