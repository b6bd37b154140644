//! Modal dialog component for messages, help and logs.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE: usize = 10;

/// Modal dialog container.
///
/// Info and error dialogs close on any key that is not a scroll key. Help
/// and logs stay open until their own close keys.
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    logger: Logger,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(Logger::new())
    }
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            logger,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    /// Scroll by `delta` lines; rendering clamps to the content
    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    /// Scroll keys shared by every dialog. Returns false for other keys.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE as isize),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };
        let closes = match dialog_type {
            DialogType::Info(_) | DialogType::Error(_) => {
                !matches!(
                    key.code,
                    KeyCode::Up
                        | KeyCode::Down
                        | KeyCode::Char('j')
                        | KeyCode::Char('k')
                        | KeyCode::PageUp
                        | KeyCode::PageDown
                        | KeyCode::Home
                        | KeyCode::End
                )
            }
            DialogType::Help => matches!(key.code, KeyCode::Esc | KeyCode::Char('?')),
            DialogType::Logs => matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
        };

        if closes {
            Action::HideDialog
        } else {
            self.handle_scroll_key(key);
            Action::None
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.is_visible() {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-1),
            MouseEventKind::ScrollDown => self.scroll_by(1),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::Info(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                &self.icons,
                &message,
                false,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Error(message) => system_dialogs::render_message_dialog(
                f,
                rect,
                &self.icons,
                &message,
                true,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logger,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
