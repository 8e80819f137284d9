/// Horizontal confidence meter for a diagnosis.
use crate::theme::AgriVisionTheme;
use egui::{Rect, Ui, Vec2};

/// Draw a bar filled to `confidence` (0.0–1.0), coloured by how sure the model is.
pub fn confidence_bar(ui: &mut Ui, confidence: f64, width: f32, height: f32) {
    let theme = AgriVisionTheme::current(ui);
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, height / 2.0, theme.bar_track);

    let fill_w = width * confidence.clamp(0.0, 1.0) as f32;
    if fill_w > 0.5 {
        let fill_rect = Rect::from_min_size(rect.min, Vec2::new(fill_w, height));
        painter.rect_filled(fill_rect, height / 2.0, theme.confidence_color(confidence));
    }

    response.on_hover_text(format!("Model confidence: {:.0}%", confidence * 100.0));
}
