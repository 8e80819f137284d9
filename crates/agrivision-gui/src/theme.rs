/// Colour scheme and visual theme for AgriVision.
///
/// Provides dark and light green-tinted themes. All colour constants are
/// defined here so the rest of the UI references semantically-named values
/// rather than raw hex codes.
use crate::state::NoticeLevel;
use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette.
pub struct AgriVisionTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub card: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub bar_track: Color32,
    pub separator: Color32,
    pub selection: Color32,
}

impl AgriVisionTheme {
    /// Dark theme: the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x14, 0x1d, 0x18),
            surface: Color32::from_rgb(0x1d, 0x2a, 0x22),
            surface_hover: Color32::from_rgb(0x27, 0x38, 0x2d),
            card: Color32::from_rgb(0x22, 0x31, 0x28),
            text_primary: Color32::from_rgb(0xe6, 0xee, 0xe8),
            text_secondary: Color32::from_rgb(0xb4, 0xc4, 0xb9),
            text_muted: Color32::from_rgb(0x74, 0x88, 0x7b),
            accent: Color32::from_rgb(0x5f, 0xd3, 0x8d),
            accent_soft: Color32::from_rgb(0x1f, 0x4a, 0x33),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            bar_track: Color32::from_rgb(0x2c, 0x3b, 0x31),
            separator: Color32::from_rgb(0x33, 0x46, 0x3a),
            selection: Color32::from_rgb(0x24, 0x4d, 0x36),
        }
    }

    /// Light theme: optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf4, 0xf8, 0xf4),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe6, 0xf2, 0xe9),
            card: Color32::from_rgb(0xfb, 0xfd, 0xfb),
            text_primary: Color32::from_rgb(0x0f, 0x17, 0x2a),
            text_secondary: Color32::from_rgb(0x33, 0x41, 0x55),
            text_muted: Color32::from_rgb(0x64, 0x74, 0x8b),
            accent: Color32::from_rgb(0x16, 0xa3, 0x4a),
            accent_soft: Color32::from_rgb(0xd1, 0xfa, 0xe5),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            success: Color32::from_rgb(0x04, 0x78, 0x57),
            bar_track: Color32::from_rgb(0xe2, 0xe8, 0xf0),
            separator: Color32::from_rgb(0xcb, 0xd5, 0xe1),
            selection: Color32::from_rgba_premultiplied(0x16, 0xa3, 0x4a, 0x30),
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Theme matching the visuals currently applied to `ui`.
    pub fn current(ui: &egui::Ui) -> Self {
        Self::for_dark_mode(ui.visuals().dark_mode)
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.card;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.weak_bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.weak_bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);
    }

    /// Status-bar colour for a notice.
    pub fn notice_color(&self, level: NoticeLevel) -> Color32 {
        match level {
            NoticeLevel::Info => self.success,
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.error,
        }
    }

    /// Bar colour for a confidence in `0.0..=1.0`: amber when low, accent when high.
    pub fn confidence_color(&self, confidence: f64) -> Color32 {
        let t = ((confidence as f32 - 0.5) / 0.5).clamp(0.0, 1.0);
        lerp_color(self.warning, self.accent, t)
    }
}

/// Linear interpolation between two colours.
fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (a.r() as f32 * (1.0 - t) + b.r() as f32 * t) as u8,
        (a.g() as f32 * (1.0 - t) + b.g() as f32 * t) as u8,
        (a.b() as f32 * (1.0 - t) + b.b() as f32 * t) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_color_endpoints() {
        let t = AgriVisionTheme::dark();
        assert_eq!(t.confidence_color(0.2), t.warning);
        assert_eq!(t.confidence_color(1.0), t.accent);
    }

    #[test]
    fn test_dark_and_light_differ() {
        assert_ne!(AgriVisionTheme::dark().background, AgriVisionTheme::light().background);
    }
}
