//! batchpick - choose which data batches go into a merge
//!
//! Batches are folders named `REGULAR`, `EXTRA1`, `EXTRA2`, … under a common
//! root. Before a merge, the user picks which of them to include in a modal
//! checklist. `REGULAR` is always included.
//!
//! ## Pieces
//!
//! - [`batch`]: batch metadata, folder scanning and merge ordering
//! - [`gui::batch_dialog`]: the selection dialog (egui)
//! - [`config`]: dialog settings loaded from `~/.batchpick/config.toml`

pub mod batch;
pub mod config;
pub mod gui;

pub use batch::{BatchInfo, BatchInfoMap, REQUIRED_BATCH, sort_batches};
