/// Content panels: one per dashboard tab, plus the dataset library.

pub mod analyze_panel;
pub mod history_panel;
pub mod library_panel;
pub mod profile_panel;
