//! Reusable UI components

pub mod badge;
pub mod filter_panel;
pub mod status_bar;

// Component architecture
pub mod catalog_component;
pub mod dialog_component;
pub mod dialogs;
pub mod menu_bar_component;

// Component exports
pub use catalog_component::CatalogComponent;
pub use dialog_component::DialogComponent;
pub use menu_bar_component::MenuBarComponent;
pub use status_bar::{StatusBar, StatusInfo};
