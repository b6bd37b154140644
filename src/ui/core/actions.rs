use crate::catalog::{CatalogEvent, Item};
use crate::menu::{CommandId, MenuEvent, MenuOutcome};

#[derive(Debug, Clone)]
pub enum Action {
    // Storefront
    Catalog(CatalogEvent),
    CatalogLoaded(Vec<Item>),
    CatalogLoadFailed(String),
    /// The cart changed; carries the new number of items in it
    CartUpdated(usize),

    // Menu bar
    Menu(MenuEvent),
    /// Effect produced by the menu controller, performed by the app
    RunMenuOutcome(MenuOutcome),

    // Host effects
    NavigateHome,
    OpenExternal(String),
    SignIn,
    SignOut,
    NewDocument,
    SaveDocument,
    ToggleAiAssistant,
    PlatformCommand(CommandId),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
}
