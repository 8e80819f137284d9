/// Profile tab: the editable farm/user record and a read-only summary.
use crate::state::AppState;
use crate::theme::AgriVisionTheme;
use egui::Ui;

/// Draw the Profile tab.
pub fn profile_panel(ui: &mut Ui, state: &mut AppState) {
    let theme = AgriVisionTheme::current(ui);
    let color_muted = ui.visuals().weak_text_color();

    ui.columns(2, |cols| {
        // ── Form ─────────────────────────────────────────
        let ui = &mut cols[0];
        ui.label(egui::RichText::new("Profile").size(16.0).strong());
        ui.add_space(6.0);

        egui::Grid::new("profile_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Display name").color(color_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut state.profile.name)
                        .hint_text("e.g., Maria from GreenFarm"),
                );
                ui.end_row();

                ui.label(egui::RichText::new("Location").color(color_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut state.profile.location)
                        .hint_text("City, Country"),
                );
                ui.end_row();

                ui.label(egui::RichText::new("Primary crops").color(color_muted));
                ui.add(
                    egui::TextEdit::singleline(&mut state.profile.crops)
                        .hint_text("Tomatoes, Corn, Wheat"),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("💾 Save changes").clicked() {
                state.save_current_profile();
            }
            if ui
                .button("Reset")
                .on_hover_text("Blank the form; saved data is kept until you save again")
                .clicked()
            {
                state.reset_profile_form();
            }
        });

        // ── Tips and summary ─────────────────────────────
        let ui = &mut cols[1];
        egui::Frame::group(ui.style())
            .fill(theme.accent_soft)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("Profile tips").strong());
                ui.label(
                    "Set your farm details and crops to personalize recommendations \
                     and track analyses by field.",
                );
            });

        ui.add_space(10.0);
        egui::Grid::new("profile_summary")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Name:", &state.profile.name),
                    ("Location:", &state.profile.location),
                    ("Crops:", &state.profile.crops),
                ] {
                    ui.label(egui::RichText::new(label).strong());
                    ui.label(or_dash(value));
                    ui.end_row();
                }
            });
    });
}

/// Empty fields are shown as an em dash.
fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "—"
    } else {
        value
    }
}
