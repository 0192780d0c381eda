//! UI Components
//!
//! Leptos components for the asset tracker page.

mod asset_form;
mod asset_tables;
mod indent_form;
mod log_panel;

pub use asset_form::AssetForm;
pub use asset_tables::AssetTables;
pub use indent_form::IndentFormView;
pub use log_panel::LogPanel;
