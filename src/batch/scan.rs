//! Batch folder discovery
//!
//! Batches live as immediate subdirectories of a root folder:
//! ```text
//! root/
//!   REGULAR/
//!   EXTRA1/
//!   EXTRA2/
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use super::sort::{BatchKind, batch_kind};
use super::{BatchInfo, BatchInfoMap};

/// Error type for batch folder scanning
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Batch root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scan `root` for batch folders.
///
/// Folder names are matched case-insensitively. The required batch is keyed by
/// its configured spelling, `EXTRA<n>` folders in upper case. Everything else
/// is skipped. When two folders differ only in case, the first in sorted
/// order wins (upper case sorts first).
///
/// An unreadable optional batch is skipped with a warning; an unreadable
/// required batch fails the scan.
pub fn scan_batch_folders(root: &Path, required: &str) -> Result<BatchInfoMap, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            folders.push(path);
        }
    }
    folders.sort();

    let required_upper = required.to_uppercase();
    let mut batches = BatchInfoMap::new();
    for path in folders {
        let Some(folder_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let name = batch_key(folder_name, required, &required_upper);
        if batch_kind(&name, required) == BatchKind::Other {
            debug!("[batchpick] Skipping non-batch folder {}", path.display());
            continue;
        }

        if let Some(existing) = batches.get(&name) {
            warn!(
                "[batchpick] Ignoring {}: batch {} already read from {}",
                path.display(),
                name,
                existing.path.display()
            );
            continue;
        }

        match read_batch_info(&path) {
            Ok(info) => {
                batches.insert(name, info);
            }
            Err(e) => skip_unreadable(&name, required, e)?,
        }
    }

    info!(
        "[batchpick] Found {} batches in {}",
        batches.len(),
        root.display()
    );
    Ok(batches)
}

/// Map key for a folder name: the configured spelling for the required batch,
/// upper case for everything else
fn batch_key(folder_name: &str, required: &str, required_upper: &str) -> String {
    let upper = folder_name.to_uppercase();
    if upper == required_upper {
        required.to_string()
    } else {
        upper
    }
}

/// Optional batches that cannot be read are dropped; the required one is fatal
fn skip_unreadable(name: &str, required: &str, err: ScanError) -> Result<(), ScanError> {
    if name == required {
        return Err(err);
    }
    warn!("[batchpick] Skipping unreadable batch {}: {}", name, err);
    Ok(())
}

fn read_batch_info(path: &Path) -> Result<BatchInfo, ScanError> {
    let io_err = |source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file_count = 0;
    for entry in fs::read_dir(path).map_err(io_err)? {
        if entry.map_err(io_err)?.path().is_file() {
            file_count += 1;
        }
    }

    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Local>::from);

    Ok(BatchInfo {
        path: path.to_path_buf(),
        file_count,
        modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::REQUIRED_BATCH;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_scan_finds_batch_folders() {
        let root = TempDir::new().unwrap();
        for name in ["REGULAR", "extra1", "EXTRA12", "notes"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        touch(&root.path().join("REGULAR"), "a.xlsx");
        touch(&root.path().join("REGULAR"), "b.xlsx");
        touch(root.path(), "EXTRA3");

        let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();

        let names: Vec<&str> = batches.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["EXTRA1", "EXTRA12", "REGULAR"]);
        assert_eq!(batches["REGULAR"].file_count, 2);
        assert_eq!(batches["EXTRA1"].file_count, 0);
    }

    #[test]
    fn test_scan_counts_only_files() {
        let root = TempDir::new().unwrap();
        let regular = root.path().join("REGULAR");
        fs::create_dir_all(regular.join("nested")).unwrap();
        touch(&regular, "data.csv");

        let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();
        assert_eq!(batches["REGULAR"].file_count, 1);
        assert_eq!(batches["REGULAR"].path, regular);
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        let err = scan_batch_folders(&missing, REQUIRED_BATCH).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_mixed_case_required_name() {
        let root = TempDir::new().unwrap();
        for name in ["Base", "EXTRA1"] {
            fs::create_dir(root.path().join(name)).unwrap();
        }

        let batches = scan_batch_folders(root.path(), "Base").unwrap();
        let names: Vec<&str> = batches.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Base", "EXTRA1"]);
    }

    #[test]
    fn test_scan_keys_required_by_configured_spelling() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("regular")).unwrap();

        let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();
        assert!(batches.contains_key("REGULAR"));
        assert_eq!(batches["REGULAR"].path, root.path().join("regular"));
    }

    #[test]
    fn test_scan_case_collision_keeps_upper_case_folder() {
        let root = TempDir::new().unwrap();
        let upper = root.path().join("EXTRA1");
        fs::create_dir(&upper).unwrap();
        touch(&upper, "a.csv");
        touch(&upper, "b.csv");
        // Case-insensitive filesystems cannot hold both folders
        if fs::create_dir(root.path().join("extra1")).is_err() {
            return;
        }

        let batches = scan_batch_folders(root.path(), REQUIRED_BATCH).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches["EXTRA1"].path, upper);
        assert_eq!(batches["EXTRA1"].file_count, 2);
    }

    #[test]
    fn test_unreadable_optional_batch_is_skipped() {
        let err = || ScanError::Io {
            path: PathBuf::from("EXTRA1"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert!(skip_unreadable("EXTRA1", REQUIRED_BATCH, err()).is_ok());
        assert!(matches!(
            skip_unreadable("REGULAR", REQUIRED_BATCH, err()),
            Err(ScanError::Io { .. })
        ));
    }
}
