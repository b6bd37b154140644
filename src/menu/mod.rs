//! Headless application menu bar core.
//!
//! The menu bar is a static table of dropdown menus plus two overlays (the
//! app switcher and the compact "mobile" navigation panel). This module holds
//! the table, the controller that decides what is open, and the two
//! capabilities it acts through: a [`CommandDispatcher`] for editor and
//! identity commands and a [`Navigator`] for leaving the current view.

pub mod apps;
pub mod command;
pub mod navigator;
pub mod state;
pub mod status;
pub mod table;

pub use apps::{default_apps, AppEntry};
pub use command::{CommandDispatcher, CommandId, CommandRegistry, Dispatch};
pub use navigator::{launch_browser, Navigator};
pub use state::{perform, MenuBarState, MenuController, MenuEvent, MenuOutcome};
pub use status::{connection_status, ConnectionStatus, CurrentUser, Session};
pub use table::{Menu, MenuAction, MenuEntry, MenuTable};
