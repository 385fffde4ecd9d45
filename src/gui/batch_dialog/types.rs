//! Types for the batch selection dialog

use crate::batch::BatchInfo;

/// Error type for dialog construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Required batch '{name}' is missing from the batch list")]
    MissingRequired { name: String },
}

/// One selectable batch row
#[derive(Debug, Clone)]
pub struct BatchCheckbox {
    name: String,
    required: bool,
    checked: bool,
    info: BatchInfo,
}

impl BatchCheckbox {
    /// New rows start checked, required or not
    pub fn new(name: impl Into<String>, required: bool, info: BatchInfo) -> Self {
        Self {
            name: name.into(),
            required,
            checked: true,
            info,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn info(&self) -> &BatchInfo {
        &self.info
    }

    /// Text shown next to the checkbox
    pub fn label(&self) -> String {
        if self.required {
            format!("{} (required)", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state. Ignored for the required batch, which stays checked.
    pub fn set_checked(&mut self, checked: bool) {
        if !self.required {
            self.checked = checked;
        }
    }

    /// Flip the checked state (no-op for the required batch)
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }
}

/// Actions that can be triggered from the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// User clicked a batch row
    Toggle(String), // batch name
    SelectAll,
    DeselectAll,
    Confirm,
    Cancel,
}

/// How a dialog ended, as reported to the host over its channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Batch names that were checked, in list order
    Confirmed(Vec<String>),
    Cancelled,
}
