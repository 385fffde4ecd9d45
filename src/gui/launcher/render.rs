//! eframe::App implementation for BatchPickerApp
//!
//! Contains the per-frame update loop and the launcher panels.

use eframe::egui::{self, RichText, Stroke};

use super::{BatchPickerApp, LaunchMode, LogKind};
use crate::batch::sort_batches_with;
use crate::gui::theme::{
    ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, ACCENT_YELLOW, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY,
    TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

const VERSION_TEXT: &str = concat!("batchpick v", env!("CARGO_PKG_VERSION"));

impl eframe::App for BatchPickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        // Outcomes queued by the dialog callbacks during the previous frame
        self.handle_dialog_outcomes();

        if self.close_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.mode == LaunchMode::Browse {
            self.render_status_bar(ctx);
            self.render_main_panel(ctx);
        } else {
            egui::CentralPanel::default()
                .frame(egui::Frame::NONE.fill(BG_PRIMARY))
                .show(ctx, |_| {});
        }

        if let Some(dialog) = self.dialog.as_mut() {
            if !dialog.show(ctx) {
                self.dialog = None;
                // Pick up the outcome on the next frame
                ctx.request_repaint();
            }
        }
    }
}

impl BatchPickerApp {
    /// Apply the dark slate theme to the egui context.
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_SECONDARY;
        style.visuals.extreme_bg_color = BG_PRIMARY;
        style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(4.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(self.work_dir.display().to_string())
                            .small()
                            .color(TEXT_MUTED),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(VERSION_TEXT).small().color(TEXT_MUTED));
                    });
                });
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let mut rescan = false;
        let mut open = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Batches")
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_open = !self.batches.is_empty() && self.dialog.is_none();
                    if ui
                        .add_enabled(
                            can_open,
                            egui::Button::new(
                                RichText::new("Select batches…").color(BG_PRIMARY).strong(),
                            )
                            .fill(ACCENT_BLUE),
                        )
                        .clicked()
                    {
                        open = true;
                    }
                    if ui.button("⟳ Rescan").clicked() {
                        rescan = true;
                    }
                });
            });

            ui.separator();

            if let Some(err) = &self.scan_error {
                ui.label(RichText::new(format!("⚠ {}", err)).color(ACCENT_YELLOW));
            } else if self.batches.is_empty() {
                ui.label(RichText::new("No batch folders found").color(TEXT_MUTED));
            }

            self.render_batch_table(ui);

            if let Some(selection) = &self.last_selection {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Last selection: {}", selection.join(", ")))
                        .color(ACCENT_GREEN),
                );
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Activity").strong().color(TEXT_DIM));
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for event in &self.logs {
                        let color = match event.kind {
                            LogKind::System => TEXT_DIM,
                            LogKind::Error => ACCENT_RED,
                        };
                        ui.label(
                            RichText::new(format!(
                                "{}  {}",
                                event.timestamp.format("%H:%M:%S"),
                                event.summary
                            ))
                            .family(egui::FontFamily::Monospace)
                            .size(11.0)
                            .color(color),
                        );
                    }
                });
        });

        if rescan {
            self.rescan();
        }
        if open {
            self.open_dialog();
        }
    }

    fn render_batch_table(&self, ui: &mut egui::Ui) {
        let required = self.config.dialog().required_batch.as_str();

        egui::Grid::new("batch_table")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for name in sort_batches_with(self.batches.keys().cloned(), required) {
                    let Some(info) = self.batches.get(&name) else {
                        continue;
                    };
                    let color = if name == required {
                        ACCENT_BLUE
                    } else {
                        TEXT_PRIMARY
                    };
                    ui.label(RichText::new(&name).strong().color(color));
                    ui.label(RichText::new(format!("{} files", info.file_count)).color(TEXT_DIM));
                    let modified = info
                        .modified
                        .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    ui.label(RichText::new(modified).color(TEXT_MUTED));
                    ui.end_row();
                }
            });
    }
}
