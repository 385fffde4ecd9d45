//! GUI module for batchpick
//!
//! The centerpiece is [`batch_dialog::BatchSelectionDialog`], a modal
//! checklist that any egui host can show. The launcher is a small host
//! window around it used by the `batchpick` binary.

pub mod batch_dialog;
pub mod launcher;
pub mod runner;
pub mod theme;

pub use batch_dialog::{
    BatchCheckbox, BatchSelectionDialog, DialogAction, DialogLayout, DialogOutcome,
    SelectionError,
};
pub use launcher::{BatchPickerApp, LaunchMode};
pub use runner::run_gui;
