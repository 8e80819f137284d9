//! AgriVision: leaf photo diagnosis demo.
//!
//! Thin binary entry point. All logic lives in the `agrivision-core`
//! and `agrivision-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use agrivision_core::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();

    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level.as_tracing())
        .init();

    tracing::info!("AgriVision starting");
    tracing::debug!("Config: {config:?}");

    let icon = agrivision_gui::icon::generate_icon(64);

    // Load the saved records *before* opening the window so the first
    // frame already shows them.
    let state = agrivision_gui::AgriVisionState::build(&config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("AgriVision -- Leaf Diagnosis")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0])
            .with_icon(icon)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "AgriVision",
        options,
        Box::new(|cc| {
            Ok(Box::new(agrivision_gui::AgriVisionApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
