/// UI widgets for AgriVision.

pub mod confidence_bar;
pub mod status_bar;
pub mod tab_bar;
pub mod thumbnail;
pub mod toolbar;
