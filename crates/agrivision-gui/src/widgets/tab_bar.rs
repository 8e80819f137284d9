/// Segmented tab selector for the three dashboard views.
use crate::state::{AppState, Tab};
use egui::Ui;

pub fn tab_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            let selected = state.active_tab == tab;
            let text = egui::RichText::new(tab.label()).size(14.0);
            let text = if selected { text.strong() } else { text };
            if ui
                .add_sized([96.0, 28.0], egui::SelectableLabel::new(selected, text))
                .clicked()
            {
                state.set_tab(tab);
            }
        }

        if !state.history().is_empty() {
            ui.label(
                egui::RichText::new(format!("{} saved", state.history().len()))
                    .size(11.0)
                    .color(ui.visuals().weak_text_color()),
            );
        }
    });
}
