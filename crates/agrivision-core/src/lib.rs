/// AgriVision Core: data model, storage, and the simulated analysis engine.
///
/// This crate contains all business logic with zero UI dependencies.
/// The workflow controller in `agrivision-gui` drives it once per frame.
///
/// # Modules
///
/// - [`model`]: Findings table, analysis results, history ledger, profile, uploaded images.
/// - [`store`]: Key/value persistence (in-memory and on-disk) plus the typed record helpers.
/// - [`analysis`]: Simulated inference with injectable randomness, clock and delay.
/// - [`intake`]: Image file reading and data-URL encoding on a background thread.
/// - [`library`]: Static catalogue of public plant-disease datasets.
/// - [`export`]: CSV export of the analysis history.
/// - [`config`]: TOML configuration with platform-default locations.
pub mod analysis;
pub mod config;
pub mod export;
pub mod intake;
pub mod library;
pub mod model;
pub mod store;
