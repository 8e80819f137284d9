/// History tab: newest-first cards for past analyses.
use crate::state::AppState;
use crate::theme::AgriVisionTheme;
use crate::widgets::confidence_bar::confidence_bar;
use egui::Ui;

const THUMB_SIZE: f32 = 72.0;

/// Draw the History tab.
pub fn history_panel(ui: &mut Ui, state: &mut AppState) {
    let theme = AgriVisionTheme::current(ui);
    let color_muted = ui.visuals().weak_text_color();
    let has_entries = !state.history().is_empty();

    // ── Header ───────────────────────────────────────────
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Recent analyses").size(16.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(has_entries, egui::Button::new("Clear"))
                .on_hover_text("Delete all saved analyses")
                .clicked()
            {
                state.clear_history();
            }
            if ui
                .add_enabled(has_entries, egui::Button::new("📤 Export CSV"))
                .on_hover_text("Save the history as a CSV file")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_file_name("agrivision-history.csv")
                    .set_title("Export history")
                    .save_file()
                {
                    state.export_history_csv(&path);
                }
            }
        });
    });
    ui.separator();

    if state.history().is_empty() {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("No history yet. Analyze a photo to see results here.")
                .color(color_muted)
                .italics(),
        );
        return;
    }

    let (history, thumbnails) = state.history_with_thumbnails();
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, entry) in history.iter().enumerate() {
                egui::Frame::group(ui.style())
                    .fill(theme.card)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal_top(|ui| {
                            match thumbnails.get(entry) {
                                Some(thumb) => {
                                    ui.add(
                                        egui::Image::from_bytes(thumb.uri, thumb.bytes)
                                            .fit_to_exact_size(egui::vec2(THUMB_SIZE, THUMB_SIZE)),
                                    );
                                }
                                None => {
                                    ui.add_sized(
                                        [THUMB_SIZE, THUMB_SIZE],
                                        egui::Label::new(egui::RichText::new("🌿").size(28.0)),
                                    );
                                }
                            }

                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(&entry.disease).size(14.0).strong(),
                                    );
                                    ui.label(
                                        egui::RichText::new(entry.local_date_label())
                                            .size(11.0)
                                            .color(color_muted),
                                    );
                                });
                                ui.horizontal(|ui| {
                                    confidence_bar(ui, entry.confidence, 120.0, 6.0);
                                    ui.label(
                                        egui::RichText::new(entry.confidence_label())
                                            .size(12.0)
                                            .color(theme.accent),
                                    );
                                });
                                ui.label(
                                    egui::RichText::new(format!("Treatment: {}", entry.treatment))
                                        .size(12.0),
                                );
                            });
                        });
                    });
                if i + 1 < history.len() {
                    ui.add_space(6.0);
                }
            }
        });
}
