/// Dataset library: a searchable list of public plant-disease datasets.
use crate::state::AppState;
use agrivision_core::library;
use egui::Ui;

/// Draw the library side panel.
pub fn library_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let color_accent = ui.visuals().hyperlink_color;

    ui.label(egui::RichText::new("📚 Dataset library").size(15.0).strong());
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.library_query)
            .hint_text("Search name, description or tag")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    let results = library::search(&state.library_query);
    if results.is_empty() {
        ui.label(
            egui::RichText::new("No datasets match your search.")
                .color(color_muted)
                .italics(),
        );
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for dataset in results {
                ui.hyperlink_to(
                    egui::RichText::new(dataset.name).strong().color(color_accent),
                    dataset.link,
                );
                ui.label(egui::RichText::new(dataset.description).size(12.0));
                ui.horizontal_wrapped(|ui| {
                    for tag in dataset.tags {
                        ui.label(
                            egui::RichText::new(format!("#{tag}"))
                                .size(11.0)
                                .color(color_muted),
                        );
                    }
                });
                ui.separator();
            }
        });
}
