//! Dialog sizing

use crate::config::DialogSettings;

/// Size of the dialog for a given number of batches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogLayout {
    pub width: f32,
    /// Whole dialog: `min(base_height + row_height * n, max_height)`
    pub height: f32,
    /// Scrollable checklist: `min(list_max_height, row_height * n)`
    pub list_height: f32,
}

impl DialogLayout {
    pub fn for_count(count: usize, settings: &DialogSettings) -> Self {
        let rows = settings.row_height * count as f32;
        Self {
            width: settings.width,
            height: (settings.base_height + rows).min(settings.max_height),
            list_height: rows.min(settings.list_max_height),
        }
    }
}
