//! Batch selection dialog
//!
//! A modal checklist that asks which batches go into a merge. Every batch
//! starts checked; the required batch (by default `REGULAR`) is shown disabled
//! and can never be unchecked. The dialog reports exactly once, either through
//! the confirm callback (with the checked names in list order) or the cancel
//! callback, and is closed afterwards.
//!
//! The dialog is immediate-mode: the host keeps it in its state and calls
//! [`BatchSelectionDialog::show`] every frame until it returns `false`.

mod layout;
mod render;
mod types;


pub use layout::DialogLayout;
pub use types::{BatchCheckbox, DialogAction, DialogOutcome, SelectionError};

use eframe::egui;
use std::sync::mpsc;
use tracing::{debug, info};

use crate::batch::{BatchInfoMap, sort_batches_with};
use crate::config::DialogSettings;

/// Called with the checked batch names when the user confirms
pub type ConfirmCallback = Box<dyn FnOnce(Vec<String>)>;
/// Called when the user cancels or dismisses the dialog
pub type CancelCallback = Box<dyn FnOnce()>;

/// State of one open batch selection dialog
pub struct BatchSelectionDialog {
    id: egui::Id,
    items: Vec<BatchCheckbox>,
    required: String,
    layout: DialogLayout,
    on_confirm: Option<ConfirmCallback>,
    on_cancel: Option<CancelCallback>,
    open: bool,
}

impl BatchSelectionDialog {
    /// Build the dialog from the scanned batches.
    ///
    /// Items are created in merge order (see [`sort_batches_with`]). An empty
    /// map gives an empty dialog; a non-empty map without the required batch
    /// is rejected.
    pub fn new(
        batch_info: &BatchInfoMap,
        settings: &DialogSettings,
        on_confirm: impl FnOnce(Vec<String>) + 'static,
        on_cancel: impl FnOnce() + 'static,
    ) -> Result<Self, SelectionError> {
        let required = settings.required_batch.as_str();
        if !batch_info.is_empty() && !batch_info.contains_key(required) {
            return Err(SelectionError::MissingRequired {
                name: required.to_string(),
            });
        }

        let items: Vec<BatchCheckbox> = sort_batches_with(batch_info.keys().cloned(), required)
            .into_iter()
            .filter_map(|name| {
                let info = batch_info.get(&name)?.clone();
                let is_required = name == required;
                Some(BatchCheckbox::new(name, is_required, info))
            })
            .collect();

        info!(
            "[batchpick:gui] Opening batch selection with {} batches",
            items.len()
        );

        Ok(Self {
            id: egui::Id::new("batch_selection_dialog"),
            layout: DialogLayout::for_count(items.len(), settings),
            items,
            required: required.to_string(),
            on_confirm: Some(Box::new(on_confirm)),
            on_cancel: Some(Box::new(on_cancel)),
            open: true,
        })
    }

    /// Build a dialog whose outcome is sent over `tx` instead of direct callbacks
    pub fn with_channel(
        batch_info: &BatchInfoMap,
        settings: &DialogSettings,
        tx: mpsc::Sender<DialogOutcome>,
    ) -> Result<Self, SelectionError> {
        let cancel_tx = tx.clone();
        Self::new(
            batch_info,
            settings,
            move |selected| {
                let _ = tx.send(DialogOutcome::Confirmed(selected));
            },
            move || {
                let _ = cancel_tx.send(DialogOutcome::Cancelled);
            },
        )
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[BatchCheckbox] {
        &self.items
    }

    pub fn item(&self, name: &str) -> Option<&BatchCheckbox> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn required_batch(&self) -> &str {
        &self.required
    }

    pub fn layout(&self) -> DialogLayout {
        self.layout
    }

    /// Names of all checked batches, in list order
    pub fn selected_names(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.is_checked())
            .map(|item| item.name().to_string())
            .collect()
    }

    /// Check every batch
    pub fn select_all(&mut self) {
        for item in &mut self.items {
            item.set_checked(true);
        }
    }

    /// Uncheck every batch except the required one
    pub fn deselect_all(&mut self) {
        for item in &mut self.items {
            item.set_checked(false);
        }
    }

    /// Flip one batch; unknown names and the required batch are ignored
    pub fn toggle(&mut self, name: &str) {
        match self.items.iter_mut().find(|item| item.name() == name) {
            Some(item) => item.toggle(),
            None => debug!("[batchpick:gui] Toggle for unknown batch '{}'", name),
        }
    }

    /// Report the current selection to the confirm callback and close
    pub fn confirm(&mut self) {
        if !self.open {
            debug!("[batchpick:gui] Confirm ignored, dialog already closed");
            return;
        }

        let selected = self.selected_names();
        info!("[batchpick:gui] Confirmed batches: {:?}", selected);

        self.on_cancel = None;
        if let Some(on_confirm) = self.on_confirm.take() {
            on_confirm(selected);
        }
        self.open = false;
    }

    /// Notify the cancel callback and close
    pub fn cancel(&mut self) {
        if !self.open {
            debug!("[batchpick:gui] Cancel ignored, dialog already closed");
            return;
        }

        info!("[batchpick:gui] Batch selection cancelled");

        self.on_confirm = None;
        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }
        self.open = false;
    }

    /// Apply a user action. Everything is ignored once the dialog is closed.
    pub fn apply(&mut self, action: DialogAction) {
        if !self.open {
            debug!("[batchpick:gui] Ignoring {:?}, dialog already closed", action);
            return;
        }

        match action {
            DialogAction::Toggle(name) => self.toggle(&name),
            DialogAction::SelectAll => self.select_all(),
            DialogAction::DeselectAll => self.deselect_all(),
            DialogAction::Confirm => self.confirm(),
            DialogAction::Cancel => self.cancel(),
        }
    }

    /// Render one frame of the dialog and apply whatever the user did.
    ///
    /// Returns whether the dialog is still open.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }

        if let Some(action) = render::render_batch_dialog(ctx, self) {
            self.apply(action);
        }

        self.open
    }
}
