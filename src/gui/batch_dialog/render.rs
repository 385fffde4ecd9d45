//! Render logic for the batch selection dialog

use eframe::egui::{self, Color32, RichText, Stroke, Vec2};

use super::BatchSelectionDialog;
use super::types::{BatchCheckbox, DialogAction};
use crate::gui::theme::{
    ACCENT_BLUE, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

const BULK_BUTTON_SIZE: Vec2 = Vec2::new(120.0, 32.0);
const ACTION_BUTTON_SIZE: Vec2 = Vec2::new(120.0, 36.0);

/// Render the modal and return the action the user triggered this frame, if any.
///
/// Escape and clicks on the backdrop count as Cancel.
pub(super) fn render_batch_dialog(
    ctx: &egui::Context,
    dialog: &BatchSelectionDialog,
) -> Option<DialogAction> {
    let layout = dialog.layout();

    let frame = egui::Frame::window(&ctx.style())
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, BG_HIGHLIGHT))
        .inner_margin(20.0);

    let modal = egui::Modal::new(dialog.id)
        .frame(frame)
        .show(ctx, |ui| {
            let mut action: Option<DialogAction> = None;

            ui.set_width(layout.width);
            ui.set_min_height(layout.height);
            ui.set_max_height(layout.height);

            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Select the batches to merge")
                        .size(16.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            });

            ui.add_space(12.0);

            egui::Frame::new()
                .fill(BG_PRIMARY)
                .inner_margin(8.0)
                .corner_radius(6.0)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .max_height(layout.list_height)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            if dialog.items().is_empty() {
                                ui.label(RichText::new("No batches found").color(TEXT_MUTED));
                            }
                            for item in dialog.items() {
                                if let Some(a) = render_batch_row(ui, item) {
                                    action = Some(a);
                                }
                            }
                        });
                });

            ui.add_space(10.0);

            centered_row(ui, 2.0 * BULK_BUTTON_SIZE.x + 10.0, |ui| {
                if ui
                    .add(egui::Button::new("Select all").min_size(BULK_BUTTON_SIZE))
                    .clicked()
                {
                    action = Some(DialogAction::SelectAll);
                }
                ui.add_space(10.0);
                if ui
                    .add(egui::Button::new("Deselect all").min_size(BULK_BUTTON_SIZE))
                    .on_hover_text(format!("{} always stays selected", dialog.required_batch()))
                    .clicked()
                {
                    action = Some(DialogAction::DeselectAll);
                }
            });

            ui.add_space(10.0);

            centered_row(ui, 2.0 * ACTION_BUTTON_SIZE.x + 10.0, |ui| {
                if ui
                    .add(
                        egui::Button::new(RichText::new("Confirm").color(BG_PRIMARY).strong())
                            .fill(ACCENT_BLUE)
                            .min_size(ACTION_BUTTON_SIZE),
                    )
                    .clicked()
                {
                    action = Some(DialogAction::Confirm);
                }
                ui.add_space(10.0);
                if ui
                    .add(
                        egui::Button::new(RichText::new("Cancel").color(TEXT_PRIMARY))
                            .fill(Color32::TRANSPARENT)
                            .stroke(Stroke::new(2.0, BG_HIGHLIGHT))
                            .min_size(ACTION_BUTTON_SIZE),
                    )
                    .clicked()
                {
                    action = Some(DialogAction::Cancel);
                }
            });

            action
        });

    match modal.inner {
        Some(action) => Some(action),
        None if modal.should_close() => Some(DialogAction::Cancel),
        None => None,
    }
}

/// One checkbox row. Required rows are drawn disabled.
fn render_batch_row(ui: &mut egui::Ui, item: &BatchCheckbox) -> Option<DialogAction> {
    let mut checked = item.is_checked();
    let mut action = None;

    ui.horizontal(|ui| {
        ui.set_min_height(28.0);
        let response = ui.add_enabled(
            row_is_interactive(item),
            egui::Checkbox::new(&mut checked, RichText::new(item.label()).size(13.0)),
        );
        if response.changed() {
            action = Some(DialogAction::Toggle(item.name().to_string()));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{} files", item.info().file_count))
                    .size(11.0)
                    .color(TEXT_DIM),
            );
        });
    });

    action
}

/// Required rows are locked; everything else can be clicked
pub(super) fn row_is_interactive(item: &BatchCheckbox) -> bool {
    !item.is_required()
}

/// Lay out a horizontal row of fixed total width centered in the available space
fn centered_row(ui: &mut egui::Ui, row_width: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        let pad = ((ui.available_width() - row_width) / 2.0).max(0.0);
        ui.add_space(pad);
        add_contents(ui);
    });
}
