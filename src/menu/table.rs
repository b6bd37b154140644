//! The static menu table.

use super::command::CommandId;
use crate::constants::{APP_NAME, HOME_PATH};

/// What an action entry does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Command(CommandId),
    /// In-app navigation to a literal path such as "/"
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        label: String,
        shortcut: Option<&'static str>,
        icon: Option<&'static str>,
        action: MenuAction,
    },
    Link {
        label: String,
        url: String,
    },
    Divider,
}

impl MenuEntry {
    fn command(label: &str, shortcut: Option<&'static str>, command: CommandId) -> Self {
        MenuEntry::Action {
            label: label.to_string(),
            shortcut,
            icon: None,
            action: MenuAction::Command(command),
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Action { label, .. } | MenuEntry::Link { label, .. } => Some(label),
            MenuEntry::Divider => None,
        }
    }

    #[must_use]
    pub fn shortcut(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Action { shortcut, .. } => *shortcut,
            _ => None,
        }
    }

    /// Dividers are the only entries that cannot be highlighted or activated
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !matches!(self, MenuEntry::Divider)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub label: String,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    /// Index of the first interactive entry at or after `from`, wrapping
    #[must_use]
    pub fn next_interactive(&self, from: usize, forward: bool) -> Option<usize> {
        let len = self.entries.len();
        if len == 0 {
            return None;
        }
        (0..len)
            .map(|step| {
                if forward {
                    (from + step) % len
                } else {
                    (from + len - step) % len
                }
            })
            .find(|&index| self.entries[index].is_interactive())
    }
}

/// Ordered top-level menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTable {
    menus: Vec<Menu>,
}

impl MenuTable {
    #[must_use]
    pub fn new(menus: Vec<Menu>) -> Self {
        Self { menus }
    }

    #[must_use]
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Menu> {
        self.menus.iter().find(|menu| menu.label == label)
    }

    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.menus.iter().position(|menu| menu.label == label)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.menus.iter().map(|menu| menu.label.as_str()).collect()
    }

    /// All entries flattened as (menu label, entry), in table order
    pub fn flatten(&self) -> impl Iterator<Item = (&str, &MenuEntry)> {
        self.menus
            .iter()
            .flat_map(|menu| menu.entries.iter().map(move |entry| (menu.label.as_str(), entry)))
    }

    /// The application's menu table. The first menu swaps Sign In / Sign Out
    /// depending on `authenticated`.
    #[must_use]
    pub fn standard(authenticated: bool, issues_url: &str) -> Self {
        use CommandId as C;
        use MenuEntry as E;

        let session_entry = if authenticated {
            E::command("Sign Out", Some("⌘Q"), C::SignOut)
        } else {
            E::command("Sign In", None, C::SignIn)
        };

        let app_menu = Menu {
            label: APP_NAME.to_string(),
            entries: vec![
                E::Action {
                    label: "Home".to_string(),
                    shortcut: Some("⌘⇧H"),
                    icon: None,
                    action: MenuAction::Navigate(HOME_PATH.to_string()),
                },
                E::Divider,
                E::command(&format!("About {}", APP_NAME), None, C::About),
                E::Divider,
                E::command("Preferences...", Some("⌘,"), C::Preferences),
                E::Divider,
                E::command(&format!("Hide {}", APP_NAME), Some("⌘H"), C::Hide),
                E::command("Hide Others", Some("⌥⌘H"), C::HideOthers),
                E::Divider,
                session_entry,
            ],
        };

        let file_menu = Menu {
            label: "File".to_string(),
            entries: vec![
                E::command("New Document", Some("⌘N"), C::NewDocument),
                E::command("Open...", Some("⌘O"), C::OpenDocument),
                E::Divider,
                E::command("Save", Some("⌘S"), C::SaveDocument),
                E::command("Save As...", Some("⇧⌘S"), C::SaveDocumentAs),
                E::Divider,
                E::command("Export as PDF", None, C::ExportPdf),
                E::command("Export as Word", None, C::ExportWord),
                E::Divider,
                E::command("Close", Some("⌘W"), C::CloseDocument),
            ],
        };

        let edit_menu = Menu {
            label: "Edit".to_string(),
            entries: vec![
                E::command("Undo", Some("⌘Z"), C::Undo),
                E::command("Redo", Some("⇧⌘Z"), C::Redo),
                E::Divider,
                E::command("Cut", Some("⌘X"), C::Cut),
                E::command("Copy", Some("⌘C"), C::Copy),
                E::command("Paste", Some("⌘V"), C::Paste),
                E::Divider,
                E::command("Select All", Some("⌘A"), C::SelectAll),
                E::command("Find...", Some("⌘F"), C::Find),
                E::command("Replace...", Some("⌥⌘F"), C::Replace),
            ],
        };

        let format_menu = Menu {
            label: "Format".to_string(),
            entries: vec![
                E::command("Bold", Some("⌘B"), C::Bold),
                E::command("Italic", Some("⌘I"), C::Italic),
                E::command("Underline", Some("⌘U"), C::Underline),
            ],
        };

        let tools_menu = Menu {
            label: "Tools".to_string(),
            entries: vec![
                E::Action {
                    label: "AI Assistant".to_string(),
                    shortcut: Some("⌘⌥A"),
                    icon: Some("🤖"),
                    action: MenuAction::Command(C::ToggleAiAssistant),
                },
                E::Divider,
                E::command("Save to Blockchain", None, C::SaveToBlockchain),
                E::command("Encrypt Document", None, C::EncryptDocument),
                E::Divider,
                E::command("Create NFT", None, C::Tokenize),
                E::command("Set Paywall", None, C::SetPaywall),
                E::Divider,
                E::command("Post to Twitter", None, C::PostToSocial),
            ],
        };

        let view_menu = Menu {
            label: "View".to_string(),
            entries: vec![
                E::command("Enter Full Screen", Some("⌃⌘F"), C::EnterFullScreen),
                E::Divider,
                E::command("Actual Size", Some("⌘0"), C::ActualSize),
                E::command("Zoom In", Some("⌘+"), C::ZoomIn),
                E::command("Zoom Out", Some("⌘-"), C::ZoomOut),
            ],
        };

        let window_menu = Menu {
            label: "Window".to_string(),
            entries: vec![
                E::command("Minimize", Some("⌘M"), C::Minimize),
                E::command("Zoom", None, C::Zoom),
                E::Divider,
                E::command("Bring All to Front", None, C::BringAllToFront),
            ],
        };

        let help_menu = Menu {
            label: "Help".to_string(),
            entries: vec![
                E::command(&format!("{} Help", APP_NAME), Some("⌘?"), C::ShowHelp),
                E::Divider,
                E::Link {
                    label: "Report an Issue".to_string(),
                    url: issues_url.to_string(),
                },
            ],
        };

        Self::new(vec![
            app_menu,
            file_menu,
            edit_menu,
            format_menu,
            tools_menu,
            view_menu,
            window_menu,
            help_menu,
        ])
    }
}
