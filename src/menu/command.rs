//! Command identifiers and the dispatcher capability the menu bar depends on.
//!
//! Menu entries never call into the editor, the identity provider or the
//! platform directly. They name a [`CommandId`] and hand it to whatever
//! [`CommandDispatcher`] the host installed.

use std::collections::HashMap;
use std::fmt;

/// Every command a menu entry can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Application
    About,
    Preferences,
    Hide,
    HideOthers,
    SignIn,
    SignOut,
    // File
    NewDocument,
    OpenDocument,
    SaveDocument,
    SaveDocumentAs,
    ExportPdf,
    ExportWord,
    CloseDocument,
    // Edit (platform text-editing commands)
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
    Find,
    Replace,
    // Format (platform text-editing commands)
    Bold,
    Italic,
    Underline,
    // Tools
    ToggleAiAssistant,
    SaveToBlockchain,
    EncryptDocument,
    Tokenize,
    SetPaywall,
    PostToSocial,
    // View
    EnterFullScreen,
    ActualSize,
    ZoomIn,
    ZoomOut,
    // Window
    Minimize,
    Zoom,
    BringAllToFront,
    // Help
    ShowHelp,
}

impl CommandId {
    /// Commands the host platform executes without any app-level meaning
    #[must_use]
    pub fn is_platform_command(self) -> bool {
        matches!(
            self,
            CommandId::Undo
                | CommandId::Redo
                | CommandId::Cut
                | CommandId::Copy
                | CommandId::Paste
                | CommandId::SelectAll
                | CommandId::Bold
                | CommandId::Italic
                | CommandId::Underline
                | CommandId::EnterFullScreen
                | CommandId::ActualSize
                | CommandId::ZoomIn
                | CommandId::ZoomOut
        )
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Result of handing a command to a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// No handler is bound; the entry is inert
    Unbound,
}

/// Capability to execute menu commands.
pub trait CommandDispatcher {
    fn dispatch(&mut self, command: CommandId) -> Dispatch;

    /// Whether `command` currently has a handler
    fn is_bound(&self, command: CommandId) -> bool;
}

type Handler = Box<dyn FnMut() + Send>;

/// Map from command to handler, filled in by the host application.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<CommandId, Handler>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `command`, replacing any previous binding
    pub fn register<F>(&mut self, command: CommandId, handler: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.handlers.insert(command, Box::new(handler));
    }

    pub fn unregister(&mut self, command: CommandId) -> bool {
        self.handlers.remove(&command).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl CommandDispatcher for CommandRegistry {
    fn dispatch(&mut self, command: CommandId) -> Dispatch {
        match self.handlers.get_mut(&command) {
            Some(handler) => {
                log::debug!("Dispatching command {}", command);
                handler();
                Dispatch::Handled
            }
            None => {
                log::debug!("Command {} has no handler, ignoring", command);
                Dispatch::Unbound
            }
        }
    }

    fn is_bound(&self, command: CommandId) -> bool {
        self.handlers.contains_key(&command)
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
