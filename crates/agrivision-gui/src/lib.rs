/// AgriVision GUI: egui-based desktop frontend.
///
/// This crate holds the workflow controller (`state`) and all UI code.
/// Storage, intake and the simulated analysis live in `agrivision-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{AgriVisionApp, AgriVisionState};
