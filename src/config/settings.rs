//! Settings configuration types

mod dialog;

pub use dialog::DialogSettings;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Batch selection dialog settings
    #[serde(default)]
    pub dialog: DialogSettings,
}
