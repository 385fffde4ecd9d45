//! Batch selection dialog settings

use serde::{Deserialize, Serialize};

use crate::batch::REQUIRED_BATCH;

/// Geometry and rules for the batch selection dialog
///
/// Heights are in egui points. The dialog grows by `row_height` per batch
/// starting at `base_height`, and stops growing at `max_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSettings {
    /// Batch that is always part of the merge and cannot be unchecked
    #[serde(default = "default_required_batch")]
    pub required_batch: String,

    #[serde(default = "default_width")]
    pub width: f32,

    /// Height of the dialog chrome (header and both button rows)
    #[serde(default = "default_base_height")]
    pub base_height: f32,

    /// Height added per batch row
    #[serde(default = "default_row_height")]
    pub row_height: f32,

    #[serde(default = "default_max_height")]
    pub max_height: f32,

    /// Cap for the scrollable checklist itself
    #[serde(default = "default_list_max_height")]
    pub list_max_height: f32,
}

fn default_required_batch() -> String {
    REQUIRED_BATCH.to_string()
}

fn default_width() -> f32 {
    500.0
}

fn default_base_height() -> f32 {
    250.0
}

fn default_row_height() -> f32 {
    35.0
}

fn default_max_height() -> f32 {
    700.0
}

fn default_list_max_height() -> f32 {
    300.0
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            required_batch: default_required_batch(),
            width: default_width(),
            base_height: default_base_height(),
            row_height: default_row_height(),
            max_height: default_max_height(),
            list_max_height: default_list_max_height(),
        }
    }
}
