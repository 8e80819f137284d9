/// Top bar: branding, greeting, library and theme toggles.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🌿 AgriVision")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        ui.label(egui::RichText::new(state.greeting_line()).size(14.0));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About AgriVision").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle ─────────────────────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            ui.separator();

            // ── Dataset library toggle ───────────────────────
            let library_tip = if state.show_library {
                "Hide dataset library"
            } else {
                "Browse public plant-disease datasets"
            };
            if ui
                .selectable_label(state.show_library, "📚 Library")
                .on_hover_text(library_tip)
                .clicked()
            {
                state.show_library = !state.show_library;
            }
        });
    });
}
