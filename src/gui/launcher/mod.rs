//! Launcher window that hosts the batch selection dialog
//!
//! Scans the batch root, lists what it found, and opens the dialog on demand.
//! Dialog outcomes come back over an mpsc channel and are drained every frame.

mod activity;
mod render;

pub use activity::{LogEvent, LogKind};

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::{info, warn};

use crate::batch::{BatchInfoMap, scan_batch_folders};
use crate::config::Config;
use crate::gui::batch_dialog::{BatchSelectionDialog, DialogOutcome};

/// Keep at most this many log lines
const MAX_LOG_LINES: usize = 200;

/// How the launcher behaves once a dialog closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Main window stays up; the dialog can be reopened
    Browse,
    /// Dialog opens at startup and the window closes with it
    SelectOnce,
}

/// Main application state
pub struct BatchPickerApp {
    pub(crate) work_dir: PathBuf,
    pub(crate) config: Config,
    pub(crate) mode: LaunchMode,
    pub(crate) batches: BatchInfoMap,
    pub(crate) scan_error: Option<String>,
    pub(crate) dialog: Option<BatchSelectionDialog>,
    outcome_tx: mpsc::Sender<DialogOutcome>,
    outcome_rx: mpsc::Receiver<DialogOutcome>,
    pub(crate) last_selection: Option<Vec<String>>,
    pub(crate) logs: Vec<LogEvent>,
    /// Last outcome, shared with the runner so the CLI can print it
    result: Arc<Mutex<Option<DialogOutcome>>>,
    pub(crate) close_requested: bool,
}

impl BatchPickerApp {
    /// Create the app and scan `work_dir`.
    ///
    /// In [`LaunchMode::SelectOnce`] the dialog is opened immediately and
    /// construction fails if it cannot be built.
    pub fn new(
        work_dir: PathBuf,
        config: Config,
        mode: LaunchMode,
        result: Arc<Mutex<Option<DialogOutcome>>>,
    ) -> Result<Self> {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        let mut app = Self {
            work_dir,
            config,
            mode,
            batches: BatchInfoMap::new(),
            scan_error: None,
            dialog: None,
            outcome_tx,
            outcome_rx,
            last_selection: None,
            logs: Vec::new(),
            result,
            close_requested: false,
        };

        app.rescan();

        if mode == LaunchMode::SelectOnce {
            if let Some(err) = &app.scan_error {
                anyhow::bail!("{}", err);
            }
            app.dialog = Some(BatchSelectionDialog::with_channel(
                &app.batches,
                app.config.dialog(),
                app.outcome_tx.clone(),
            )?);
        }

        Ok(app)
    }

    /// Re-read the batch folders from disk
    pub(crate) fn rescan(&mut self) {
        match scan_batch_folders(&self.work_dir, &self.config.dialog().required_batch) {
            Ok(batches) => {
                self.logs.push(LogEvent::system(format!(
                    "Scanned {}: {} batches",
                    self.work_dir.display(),
                    batches.len()
                )));
                self.batches = batches;
                self.scan_error = None;
            }
            Err(e) => {
                warn!("[batchpick:gui] Scan failed: {}", e);
                self.logs.push(LogEvent::error(e.to_string()));
                self.batches.clear();
                self.scan_error = Some(e.to_string());
            }
        }
    }

    /// Open the selection dialog unless one is already showing
    pub(crate) fn open_dialog(&mut self) {
        if self.dialog.is_some() {
            return;
        }

        match BatchSelectionDialog::with_channel(
            &self.batches,
            self.config.dialog(),
            self.outcome_tx.clone(),
        ) {
            Ok(dialog) => self.dialog = Some(dialog),
            Err(e) => {
                warn!("[batchpick:gui] Cannot open batch selection: {}", e);
                self.logs.push(LogEvent::error(e.to_string()));
            }
        }
    }

    /// Drain dialog outcomes reported since the last frame
    pub(crate) fn handle_dialog_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match &outcome {
                DialogOutcome::Confirmed(selected) => {
                    info!("[batchpick:gui] Batches selected for merge: {:?}", selected);
                    self.logs.push(LogEvent::system(format!(
                        "Selected for merge: {}",
                        selected.join(", ")
                    )));
                    self.last_selection = Some(selected.clone());
                }
                DialogOutcome::Cancelled => {
                    self.logs.push(LogEvent::system("Batch selection cancelled"));
                }
            }

            if let Ok(mut guard) = self.result.lock() {
                *guard = Some(outcome);
            }

            if self.mode == LaunchMode::SelectOnce {
                self.close_requested = true;
            }
        }

        if self.logs.len() > MAX_LOG_LINES {
            let excess = self.logs.len() - MAX_LOG_LINES;
            self.logs.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn batch_root(names: &[&str]) -> TempDir {
        let root = TempDir::new().unwrap();
        for name in names {
            fs::create_dir(root.path().join(name)).unwrap();
        }
        root
    }

    fn app(root: &TempDir, mode: LaunchMode) -> Result<BatchPickerApp> {
        BatchPickerApp::new(
            root.path().to_path_buf(),
            Config::with_defaults(),
            mode,
            Arc::new(Mutex::new(None)),
        )
    }

    #[test]
    fn test_browse_mode_scans_without_dialog() {
        let root = batch_root(&["REGULAR", "EXTRA1"]);
        let app = app(&root, LaunchMode::Browse).unwrap();

        assert_eq!(app.batches.len(), 2);
        assert!(app.dialog.is_none());
        assert!(app.scan_error.is_none());
    }

    #[test]
    fn test_confirm_flows_back_to_app() {
        let root = batch_root(&["REGULAR", "EXTRA1", "EXTRA2"]);
        let result = Arc::new(Mutex::new(None));
        let mut app = BatchPickerApp::new(
            root.path().to_path_buf(),
            Config::with_defaults(),
            LaunchMode::SelectOnce,
            Arc::clone(&result),
        )
        .unwrap();

        let dialog = app.dialog.as_mut().unwrap();
        dialog.toggle("EXTRA1");
        dialog.confirm();
        app.handle_dialog_outcomes();

        let expected = vec!["REGULAR".to_string(), "EXTRA2".to_string()];
        assert_eq!(app.last_selection, Some(expected.clone()));
        assert_eq!(
            *result.lock().unwrap(),
            Some(DialogOutcome::Confirmed(expected))
        );
        assert!(app.close_requested);
    }

    #[test]
    fn test_browse_mode_stays_open_after_cancel() {
        let root = batch_root(&["REGULAR"]);
        let mut app = app(&root, LaunchMode::Browse).unwrap();

        app.open_dialog();
        app.dialog.as_mut().unwrap().cancel();
        app.handle_dialog_outcomes();

        assert!(!app.close_requested);
        assert!(app.last_selection.is_none());
        assert_eq!(app.logs.last().unwrap().summary, "Batch selection cancelled");
    }

    #[test]
    fn test_missing_required_logs_error_in_browse_mode() {
        let root = batch_root(&["EXTRA1"]);
        let mut app = app(&root, LaunchMode::Browse).unwrap();

        app.open_dialog();
        assert!(app.dialog.is_none());
        assert_eq!(app.logs.last().unwrap().kind, LogKind::Error);
    }

    #[test]
    fn test_missing_required_fails_select_mode() {
        let root = batch_root(&["EXTRA1"]);
        assert!(app(&root, LaunchMode::SelectOnce).is_err());
    }
}
