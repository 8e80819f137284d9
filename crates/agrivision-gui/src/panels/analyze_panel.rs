/// Analyze tab: image intake, the analyze action, and the latest result.
use crate::state::AppState;
use crate::theme::AgriVisionTheme;
use crate::widgets::confidence_bar::confidence_bar;
use agrivision_core::intake::IMAGE_EXTENSIONS;
use agrivision_core::model::AnalysisResult;
use egui::Ui;

const PREVIEW_MAX_HEIGHT: f32 = 280.0;

/// Draw the Analyze tab.
pub fn analyze_panel(ui: &mut Ui, state: &mut AppState) {
    accept_dropped_files(ui, state);

    let theme = AgriVisionTheme::current(ui);
    let color_muted = ui.visuals().weak_text_color();

    ui.columns(2, |cols| {
        // ── Left: upload / preview ───────────────────────
        let ui = &mut cols[0];
        egui::Frame::group(ui.style())
            .fill(theme.card)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if state.image().is_none() {
                    upload_prompt(ui, state);
                } else {
                    image_preview(ui, state);
                }
            });

        // ── Right: result and tips ───────────────────────
        let ui = &mut cols[1];
        match state.result() {
            Some(result) => result_card(ui, result, &theme),
            None => {
                ui.label(egui::RichText::new("What you’ll get").strong());
                for line in [
                    "Likely disease classification",
                    "Confidence estimate",
                    "Step-by-step treatment plan",
                    "Saved to your history",
                ] {
                    ui.label(egui::RichText::new(format!("• {line}")).color(color_muted));
                }
            }
        }

        ui.add_space(12.0);
        ui.label(egui::RichText::new("Quick tips").strong());
        for line in [
            "Take photos in good light, avoid harsh shadows.",
            "Fill the frame with the affected leaf area.",
            "Upload multiple angles for better assessment.",
        ] {
            ui.label(egui::RichText::new(format!("• {line}")).color(color_muted));
        }
    });
}

fn upload_prompt(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("🌿").size(40.0));
        ui.label(egui::RichText::new("Upload a leaf photo").size(15.0).strong());
        ui.label(
            egui::RichText::new("JPG or PNG, clear close-up works best")
                .size(12.0)
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(8.0);

        let label = if state.has_pending_reads() {
            "Reading…"
        } else {
            "📂 Choose photo"
        };
        if ui
            .add_enabled(!state.has_pending_reads(), egui::Button::new(label))
            .on_hover_text("You can also drop an image onto the window")
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .set_title("Choose a leaf photo")
                .pick_file()
            {
                state.select_image(path);
            }
        }
        ui.add_space(24.0);
    });
}

fn image_preview(ui: &mut Ui, state: &mut AppState) {
    let (Some(img), Some(uri)) = (state.image(), state.preview_uri()) else {
        return;
    };
    let caption = format!("{} · {:.1} KiB", img.name, img.size() as f64 / 1024.0);
    ui.add(
        egui::Image::from_bytes(uri, img.bytes.clone())
            .max_height(PREVIEW_MAX_HEIGHT)
            .maintain_aspect_ratio(true),
    );
    ui.label(
        egui::RichText::new(caption)
            .size(11.0)
            .color(ui.visuals().weak_text_color()),
    );

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let analyze_label = if state.is_loading() {
            "Analyzing…"
        } else {
            "🔬 Analyze"
        };
        if ui
            .add_enabled(state.can_analyze(), egui::Button::new(analyze_label))
            .clicked()
        {
            state.analyze();
        }
        if ui
            .add_enabled(!state.is_loading(), egui::Button::new("Change"))
            .clicked()
        {
            state.clear_image();
        }
        if state.is_loading() {
            ui.spinner();
        }
    });
}

fn result_card(ui: &mut Ui, result: &AnalysisResult, theme: &AgriVisionTheme) {
    egui::Frame::group(ui.style())
        .fill(theme.accent_soft)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Latest diagnosis")
                    .size(11.0)
                    .color(ui.visuals().weak_text_color()),
            );
            ui.label(egui::RichText::new(&result.disease).size(18.0).strong());
            ui.horizontal(|ui| {
                confidence_bar(ui, result.confidence, 160.0, 8.0);
                ui.label(egui::RichText::new(result.confidence_label()).color(theme.accent));
            });
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Treatment").strong());
            ui.label(result.treatment.as_str());
        });
}

/// Files dropped onto the window go through the same intake as the picker.
fn accept_dropped_files(ui: &Ui, state: &mut AppState) {
    let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
    // Only the last file counts; intake is last-resolved-wins anyway.
    let Some(file) = dropped.into_iter().last() else {
        return;
    };
    if let Some(path) = file.path {
        state.select_image(path);
    } else if let Some(bytes) = file.bytes {
        state.select_image_bytes(&file.name, bytes.to_vec());
    }
}
