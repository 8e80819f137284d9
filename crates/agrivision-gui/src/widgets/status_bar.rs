/// Bottom status bar: analysis progress, the latest notice, and record counts.
use crate::state::AppState;
use crate::theme::AgriVisionTheme;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &mut AppState) {
    let theme = AgriVisionTheme::current(ui);
    let color_weak = ui.visuals().weak_text_color();
    let color_accent = ui.visuals().hyperlink_color;

    ui.horizontal(|ui| {
        if state.is_loading() {
            ui.spinner();
            ui.label(egui::RichText::new("Analyzing leaf…").size(12.0).color(color_accent));
        } else if state.has_pending_reads() {
            ui.spinner();
            ui.label(egui::RichText::new("Reading image…").size(12.0).color(color_weak));
        } else {
            ui.label(egui::RichText::new("Ready").size(12.0).color(color_weak));
        }

        let mut dismiss = false;
        if let Some(notice) = state.latest_notice() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{}  {}",
                    notice.created.format("%H:%M:%S"),
                    notice.message
                ))
                .size(12.0)
                .color(theme.notice_color(notice.level)),
            );
            dismiss = ui
                .small_button("✕")
                .on_hover_text("Dismiss notices")
                .clicked();
        }
        if dismiss {
            state.dismiss_notices();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let count = state.history().len();
            let noun = if count == 1 { "analysis" } else { "analyses" };
            ui.label(
                egui::RichText::new(format!("{count} {noun} in history"))
                    .size(12.0)
                    .color(color_weak),
            );
        });
    });
}
