/// Main `eframe::App` implementation for AgriVision.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::{AppState, Tab};
use crate::theme::AgriVisionTheme;
use crate::widgets;
use agrivision_core::analysis::AnalysisEnv;
use agrivision_core::config::AppConfig;
use agrivision_core::store::{FileStore, KeyValueStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Repaint interval while background work is outstanding.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// persisted records are loaded before the OS window is created.
pub struct AgriVisionState {
    pub(crate) inner: AppState,
}

impl AgriVisionState {
    /// Open the data directory named by `config` and load the saved records.
    ///
    /// If the directory cannot be created the session runs on a volatile
    /// in-memory store instead.
    pub fn build(config: &AppConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = match FileStore::open(&config.data_dir) {
            Ok(store) => {
                info!("Using data directory {}", store.dir().display());
                Arc::new(store)
            }
            Err(e) => {
                warn!(
                    "Could not open data directory {}: {e} -- history will not be kept",
                    config.data_dir.display()
                );
                Arc::new(MemoryStore::new())
            }
        };

        let mut state = AppState::new(store, AnalysisEnv::system(config.analysis_delay()));
        state.dark_mode = config.dark_mode;
        Self { inner: state }
    }

    pub fn state(&self) -> &AppState {
        &self.inner
    }
}

/// The AgriVision application.
pub struct AgriVisionApp {
    state: AppState,
}

impl AgriVisionApp {
    /// Create a new application instance from pre-built state.
    ///
    /// The state should have been constructed by [`AgriVisionState::build()`]
    /// *before* `eframe::run_native` is called.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: AgriVisionState) -> Self {
        // Decoders for the upload preview and history thumbnails.
        egui_extras::install_image_loaders(&cc.egui_ctx);

        AgriVisionTheme::for_dark_mode(state.inner.dark_mode).apply(&cc.egui_ctx);

        Self { state: state.inner }
    }
}

impl eframe::App for AgriVisionApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        AgriVisionTheme::for_dark_mode(self.state.dark_mode).apply(ctx);

        // ── Process background messages ───────────────────────────────────
        let _changed = self.state.process_messages();
        for uri in self.state.take_stale_image_uris() {
            ctx.forget_image(&uri);
        }

        if self.state.is_loading() || self.state.has_pending_reads() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About AgriVision")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🌿 AgriVision")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "Leaf photo diagnosis demo.\n\
                             Diagnoses are simulated and are not agronomic advice.",
                        )
                        .size(12.0),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &mut self.state);
                ui.add_space(2.0);
            });

        // ── Dataset library (optional right panel) ────────────────────────
        if self.state.show_library {
            egui::SidePanel::right("library_panel")
                .default_width(300.0)
                .min_width(220.0)
                .max_width(480.0)
                .resizable(true)
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    panels::library_panel::library_panel(ui, &mut self.state);
                });
        }

        // ── Central panel (dashboard tabs) ────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new("Dashboard").size(22.0).strong());
            ui.add_space(4.0);
            widgets::tab_bar::tab_bar(ui, &mut self.state);
            ui.separator();
            ui.add_space(6.0);

            match self.state.active_tab {
                Tab::Analyze => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        panels::analyze_panel::analyze_panel(ui, &mut self.state);
                    });
                }
                Tab::History => panels::history_panel::history_panel(ui, &mut self.state),
                Tab::Profile => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        panels::profile_panel::profile_panel(ui, &mut self.state);
                    });
                }
            }
        });
    }
}
