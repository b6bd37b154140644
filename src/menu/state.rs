//! Menu bar controller: which surface is open and what activating an entry means.
//!
//! At most one of {a top-level menu, the app switcher, the mobile overlay}
//! is open. [`MenuController::apply`] is the only mutator; it returns a
//! [`MenuOutcome`] describing the outward effect (if any) for the caller
//! to perform through [`perform`].

use super::apps::AppEntry;
use super::command::{CommandDispatcher, Dispatch};
use super::navigator::Navigator;
use super::table::{MenuAction, MenuEntry, MenuTable};

/// Input to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on a top-level menu button
    ToggleMenu(String),
    /// Pointer entered a top-level menu button
    HoverMenu(String),
    /// Keyboard: open the first menu
    OpenFirstMenu,
    /// Keyboard: move to the neighbouring top-level menu while one is open
    NextMenu,
    PreviousMenu,
    HighlightNext,
    HighlightPrevious,
    /// Activate the highlighted entry of whichever surface is open
    ActivateHighlighted,
    /// Activate entry `index` of the open menu
    ActivateEntry(usize),
    ToggleAppSwitcher,
    ActivateApp(usize),
    ToggleMobile,
    /// Activate entry `index` of the flattened table in the mobile overlay
    ActivateMobileEntry(usize),
    /// Outside click or Escape
    DismissAll,
}

/// Outward effect of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    None,
    Run(MenuAction),
    OpenExternal(String),
    /// Leave for a sibling application
    SwitchApp(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBarState {
    pub open_menu: Option<String>,
    pub highlighted: Option<usize>,
    pub app_switcher_open: bool,
    pub app_highlight: usize,
    pub mobile_open: bool,
    pub mobile_highlight: usize,
}

impl MenuBarState {
    #[must_use]
    pub fn anything_open(&self) -> bool {
        self.open_menu.is_some() || self.app_switcher_open || self.mobile_open
    }

    fn close_all(&mut self) {
        self.open_menu = None;
        self.highlighted = None;
        self.app_switcher_open = false;
        self.mobile_open = false;
    }
}

#[derive(Debug, Clone)]
pub struct MenuController {
    table: MenuTable,
    apps: Vec<AppEntry>,
    state: MenuBarState,
}

impl MenuController {
    #[must_use]
    pub fn new(table: MenuTable, apps: Vec<AppEntry>) -> Self {
        Self {
            table,
            apps,
            state: MenuBarState::default(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &MenuTable {
        &self.table
    }

    #[must_use]
    pub fn apps(&self) -> &[AppEntry] {
        &self.apps
    }

    #[must_use]
    pub fn state(&self) -> &MenuBarState {
        &self.state
    }

    /// Replace the table (e.g. after sign-in). An open menu that no longer
    /// exists is closed.
    pub fn set_table(&mut self, table: MenuTable) {
        self.table = table;
        if let Some(label) = &self.state.open_menu {
            if self.table.get(label).is_none() {
                self.state.open_menu = None;
                self.state.highlighted = None;
            }
        }
    }

    pub fn apply(&mut self, event: MenuEvent) -> MenuOutcome {
        match event {
            MenuEvent::ToggleMenu(label) => {
                if self.state.open_menu.as_deref() == Some(label.as_str()) {
                    self.state.open_menu = None;
                    self.state.highlighted = None;
                } else {
                    self.open_menu(&label);
                }
                MenuOutcome::None
            }
            MenuEvent::HoverMenu(label) => {
                if self.state.open_menu.is_some() && self.state.open_menu.as_deref() != Some(label.as_str()) {
                    self.open_menu(&label);
                }
                MenuOutcome::None
            }
            MenuEvent::OpenFirstMenu => {
                if let Some(first) = self.table.menus().first().map(|m| m.label.clone()) {
                    self.open_menu(&first);
                }
                MenuOutcome::None
            }
            MenuEvent::NextMenu => {
                self.shift_menu(true);
                MenuOutcome::None
            }
            MenuEvent::PreviousMenu => {
                self.shift_menu(false);
                MenuOutcome::None
            }
            MenuEvent::HighlightNext => {
                self.move_highlight(true);
                MenuOutcome::None
            }
            MenuEvent::HighlightPrevious => {
                self.move_highlight(false);
                MenuOutcome::None
            }
            MenuEvent::ActivateHighlighted => {
                if self.state.open_menu.is_some() {
                    match self.state.highlighted {
                        Some(index) => self.activate_entry(index),
                        None => MenuOutcome::None,
                    }
                } else if self.state.app_switcher_open {
                    self.activate_app(self.state.app_highlight)
                } else if self.state.mobile_open {
                    self.activate_mobile_entry(self.state.mobile_highlight)
                } else {
                    MenuOutcome::None
                }
            }
            MenuEvent::ActivateEntry(index) => self.activate_entry(index),
            MenuEvent::ToggleAppSwitcher => {
                let open = !self.state.app_switcher_open;
                self.state.close_all();
                self.state.app_switcher_open = open;
                if open {
                    self.state.app_highlight = self.apps.iter().position(AppEntry::is_navigable).unwrap_or(0);
                }
                MenuOutcome::None
            }
            MenuEvent::ActivateApp(index) => self.activate_app(index),
            MenuEvent::ToggleMobile => {
                let open = !self.state.mobile_open;
                self.state.close_all();
                self.state.mobile_open = open;
                if open {
                    self.state.mobile_highlight = self.first_mobile_interactive(0, true).unwrap_or(0);
                }
                MenuOutcome::None
            }
            MenuEvent::ActivateMobileEntry(index) => self.activate_mobile_entry(index),
            MenuEvent::DismissAll => {
                self.state.close_all();
                MenuOutcome::None
            }
        }
    }

    fn open_menu(&mut self, label: &str) {
        let Some(menu) = self.table.get(label) else {
            return;
        };
        let highlighted = menu.next_interactive(0, true);
        self.state.close_all();
        self.state.open_menu = Some(label.to_string());
        self.state.highlighted = highlighted;
    }

    fn shift_menu(&mut self, forward: bool) {
        let Some(current) = self.state.open_menu.as_deref().and_then(|l| self.table.position(l)) else {
            return;
        };
        let count = self.table.menus().len();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        let label = self.table.menus()[next].label.clone();
        self.open_menu(&label);
    }

    fn move_highlight(&mut self, forward: bool) {
        if let Some(menu) = self.state.open_menu.as_deref().and_then(|l| self.table.get(l)) {
            let len = menu.entries.len();
            if len == 0 {
                return;
            }
            let start = match self.state.highlighted {
                Some(current) if forward => (current + 1) % len,
                Some(current) => (current + len - 1) % len,
                None => 0,
            };
            self.state.highlighted = menu.next_interactive(start, forward);
        } else if self.state.app_switcher_open {
            let len = self.apps.len();
            if len > 0 {
                self.state.app_highlight = if forward {
                    (self.state.app_highlight + 1) % len
                } else {
                    (self.state.app_highlight + len - 1) % len
                };
            }
        } else if self.state.mobile_open {
            let len = self.table.flatten().count();
            if len > 0 {
                let start = if forward {
                    (self.state.mobile_highlight + 1) % len
                } else {
                    (self.state.mobile_highlight + len - 1) % len
                };
                if let Some(index) = self.first_mobile_interactive(start, forward) {
                    self.state.mobile_highlight = index;
                }
            }
        }
    }

    fn first_mobile_interactive(&self, from: usize, forward: bool) -> Option<usize> {
        let entries: Vec<&MenuEntry> = self.table.flatten().map(|(_, entry)| entry).collect();
        let len = entries.len();
        (0..len)
            .map(|step| if forward { (from + step) % len } else { (from + len - step) % len })
            .find(|&index| entries[index].is_interactive())
    }

    fn activate_entry(&mut self, index: usize) -> MenuOutcome {
        let Some(menu) = self.state.open_menu.as_deref().and_then(|l| self.table.get(l)) else {
            return MenuOutcome::None;
        };
        let outcome = match menu.entries.get(index) {
            Some(MenuEntry::Divider) | None => return MenuOutcome::None,
            Some(entry) => outcome_for(entry),
        };
        self.state.open_menu = None;
        self.state.highlighted = None;
        outcome
    }

    fn activate_app(&mut self, index: usize) -> MenuOutcome {
        if !self.state.app_switcher_open {
            return MenuOutcome::None;
        }
        match self.apps.get(index) {
            Some(app) if app.is_navigable() => {
                let url = app.url.clone();
                self.state.app_switcher_open = false;
                MenuOutcome::SwitchApp(url)
            }
            _ => MenuOutcome::None,
        }
    }

    fn activate_mobile_entry(&mut self, index: usize) -> MenuOutcome {
        if !self.state.mobile_open {
            return MenuOutcome::None;
        }
        let outcome = match self.table.flatten().nth(index) {
            Some((_, MenuEntry::Divider)) | None => return MenuOutcome::None,
            Some((_, entry)) => outcome_for(entry),
        };
        self.state.mobile_open = false;
        outcome
    }
}

fn outcome_for(entry: &MenuEntry) -> MenuOutcome {
    match entry {
        MenuEntry::Action { action, .. } => MenuOutcome::Run(action.clone()),
        MenuEntry::Link { url, .. } => MenuOutcome::OpenExternal(url.clone()),
        MenuEntry::Divider => MenuOutcome::None,
    }
}

/// Carry out an outcome through the host's capabilities.
///
/// Returns the dispatch result for command outcomes so callers can surface
/// inert entries.
pub fn perform(
    outcome: MenuOutcome,
    dispatcher: &mut dyn CommandDispatcher,
    navigator: &mut dyn Navigator,
) -> Option<Dispatch> {
    match outcome {
        MenuOutcome::None => None,
        MenuOutcome::Run(MenuAction::Command(command)) => Some(dispatcher.dispatch(command)),
        MenuOutcome::Run(MenuAction::Navigate(path)) => {
            navigator.navigate(&path);
            None
        }
        MenuOutcome::OpenExternal(url) | MenuOutcome::SwitchApp(url) => {
            navigator.open_external(&url);
            None
        }
    }
}
