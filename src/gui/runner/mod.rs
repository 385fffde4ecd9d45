//! GUI runner - launches the batchpick window

mod fonts;

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

use super::batch_dialog::{DialogLayout, DialogOutcome};
use super::launcher::{BatchPickerApp, LaunchMode};
use crate::config::Config;

use fonts::configure_fonts;

/// Extra room around the dialog when the window is sized to fit it
const WINDOW_PADDING: f32 = 60.0;

/// Resolve the batch root to an absolute path where possible
fn resolve_work_dir(work_dir: PathBuf) -> PathBuf {
    let work_dir = if work_dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        work_dir
    };
    match work_dir.canonicalize() {
        Ok(abs) => abs,
        Err(_) => match std::env::current_dir() {
            Ok(cwd) if work_dir.is_relative() => cwd.join(work_dir),
            _ => work_dir,
        },
    }
}

/// Run the GUI until the window closes.
///
/// Returns the last dialog outcome, or `None` if the window was closed
/// without the dialog reporting.
pub fn run_gui(
    work_dir: PathBuf,
    config: Config,
    mode: LaunchMode,
) -> Result<Option<DialogOutcome>> {
    let work_dir = resolve_work_dir(work_dir);
    let result = Arc::new(Mutex::new(None));

    let app = BatchPickerApp::new(work_dir, config, mode, Arc::clone(&result))?;

    let viewport = match mode {
        LaunchMode::Browse => egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([560.0, 360.0]),
        LaunchMode::SelectOnce => {
            let layout = DialogLayout::for_count(app.batches.len(), app.config.dialog());
            egui::ViewportBuilder::default()
                .with_inner_size([
                    layout.width + WINDOW_PADDING,
                    layout.height + WINDOW_PADDING,
                ])
                .with_resizable(false)
        }
    };

    let options = eframe::NativeOptions {
        viewport: viewport.with_decorations(true),
        centered: true,
        ..Default::default()
    };

    info!(
        "[batchpick] Starting GUI for {} ({} batches)",
        app.work_dir.display(),
        app.batches.len()
    );

    eframe::run_native(
        "batchpick",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    let outcome = result
        .lock()
        .map_err(|_| anyhow::anyhow!("Dialog result lock poisoned"))?
        .take();
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_work_dir_canonicalizes() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_work_dir(dir.path().to_path_buf());
        assert!(resolved.is_absolute());
        assert_eq!(resolved, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_work_dir_keeps_missing_relative_paths_absolute() {
        let resolved = resolve_work_dir(PathBuf::from("does-not-exist-batchpick"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("does-not-exist-batchpick"));
    }
}
