//! Select command implementation

use anyhow::{Result, bail};
use std::path::Path;

use batchpick::config::Config;
use batchpick::gui::{DialogOutcome, LaunchMode, run_gui};

/// Show the selection dialog and print the confirmed batch names.
///
/// Cancelling (or closing the window) is reported as an error so scripts
/// can skip the merge on a non-zero exit status.
pub fn select_command(work_dir: &Path, config: Config, json: bool) -> Result<()> {
    let outcome = run_gui(work_dir.to_path_buf(), config, LaunchMode::SelectOnce)?;

    match outcome {
        Some(DialogOutcome::Confirmed(selected)) => {
            if json {
                println!("{}", serde_json::to_string(&selected)?);
            } else {
                for name in &selected {
                    println!("{}", name);
                }
            }
            Ok(())
        }
        Some(DialogOutcome::Cancelled) | None => bail!("Batch selection cancelled"),
    }
}
