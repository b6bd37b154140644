use crate::catalog::{CatalogEvent, CatalogState, FilterState, Item, PriceRange};
use crate::config::Config;
use crate::constants::{
    ABOUT_TEXT, HELP_TEXT, HOME_PATH, INFO_COMING_SOON_OPEN, INFO_COMING_SOON_SAVE_AS, INFO_DOCUMENT_SAVED,
    INFO_NEW_DOCUMENT, INFO_SIGNED_OUT, INFO_SOCIAL_POST, INFO_TOKENIZE, PRICE_SLIDER_MIN,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::menu::{launch_browser, perform, CommandId, CommandRegistry, Dispatch, MenuEvent, Navigator, Session};
use crate::ui::components::{CatalogComponent, DialogComponent, MenuBarComponent, StatusBar, StatusInfo};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::collections::VecDeque;
use tokio::sync::mpsc;

/// Text-editing commands the host platform would execute on its own
const PLATFORM_COMMANDS: [CommandId; 13] = [
    CommandId::Undo,
    CommandId::Redo,
    CommandId::Cut,
    CommandId::Copy,
    CommandId::Paste,
    CommandId::SelectAll,
    CommandId::Bold,
    CommandId::Italic,
    CommandId::Underline,
    CommandId::EnterFullScreen,
    CommandId::ActualSize,
    CommandId::ZoomIn,
    CommandId::ZoomOut,
];

/// Navigator backed by the app's action channel
pub struct HostNavigator {
    tx: mpsc::UnboundedSender<Action>,
}

impl HostNavigator {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    fn send(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::warn!("Navigator: action channel closed: {}", e);
        }
    }
}

impl Navigator for HostNavigator {
    fn navigate(&mut self, path: &str) {
        if path == HOME_PATH {
            self.send(Action::NavigateHome);
        } else {
            log::debug!("Navigator: no view for path {}", path);
        }
    }

    fn open_external(&mut self, url: &str) {
        self.send(Action::OpenExternal(url.to_string()));
    }
}

/// Bind every command the stand-in host implements. The rest stay unbound
/// and their menu entries are inert.
pub fn register_host_commands(registry: &mut CommandRegistry, tx: &mpsc::UnboundedSender<Action>) {
    let mut bind = |command: CommandId, action: Action| {
        let tx = tx.clone();
        registry.register(command, move || {
            if let Err(e) = tx.send(action.clone()) {
                log::warn!("Command {}: action channel closed: {}", command, e);
            }
        });
    };

    let info = |text: &str| Action::ShowDialog(DialogType::Info(text.to_string()));

    bind(CommandId::About, info(ABOUT_TEXT));
    bind(CommandId::ShowHelp, info(HELP_TEXT));
    bind(CommandId::SignIn, Action::SignIn);
    bind(CommandId::SignOut, Action::SignOut);
    bind(CommandId::NewDocument, Action::NewDocument);
    bind(CommandId::SaveDocument, Action::SaveDocument);
    bind(CommandId::OpenDocument, info(INFO_COMING_SOON_OPEN));
    bind(CommandId::SaveDocumentAs, info(INFO_COMING_SOON_SAVE_AS));
    bind(CommandId::Tokenize, info(INFO_TOKENIZE));
    bind(CommandId::PostToSocial, info(INFO_SOCIAL_POST));
    bind(CommandId::ToggleAiAssistant, Action::ToggleAiAssistant);
    for command in PLATFORM_COMMANDS {
        bind(command, Action::PlatformCommand(command));
    }
}

pub struct AppComponent {
    // Component composition
    menu_bar: MenuBarComponent,
    catalog: CatalogComponent,
    dialog: DialogComponent,

    // Application state
    status: StatusInfo,
    config: Config,
    icons: IconService,

    // Host collaborators
    commands: CommandRegistry,
    navigator: HostNavigator,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
    fatal_error: Option<String>,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let icons = IconService::new(config.ui.icon_theme);

        let mut commands = CommandRegistry::new();
        register_host_commands(&mut commands, &action_tx);

        let mut menu_bar = MenuBarComponent::new(
            config.session.to_session(),
            config.links.social_url.clone(),
            config.links.issues_url.clone(),
            config.ui.compact_width,
        );
        menu_bar.icons = icons.clone();
        let mut catalog = CatalogComponent::new();
        catalog.icons = icons.clone();
        let mut dialog = DialogComponent::new(logger.clone());
        dialog.icons = icons.clone();

        Self {
            menu_bar,
            catalog,
            dialog,
            status: StatusInfo::default(),
            config,
            icons,
            commands,
            navigator: HostNavigator::new(action_tx.clone()),
            action_tx,
            action_rx,
            logger,
            should_quit: false,
            fatal_error: None,
        }
    }

    /// Sender for background tasks (catalog loading)
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Error that ended the session, if any
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal_error.as_deref()
    }

    pub fn catalog(&self) -> &CatalogComponent {
        &self.catalog
    }

    pub fn menu_bar(&self) -> &MenuBarComponent {
        &self.menu_bar
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status(&self) -> &StatusInfo {
        &self.status
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Initial storefront state from freshly loaded items and the config
    fn initial_catalog(&self, items: Vec<Item>) -> CatalogState {
        let max_price = f64::from(self.config.catalog.initial_max_price);
        let price = PriceRange::new(f64::from(PRICE_SLIDER_MIN), max_price).unwrap_or_default();
        let filter = FilterState {
            sort: self.config.catalog.default_sort,
            price,
            ..FilterState::default()
        };
        let mut state = CatalogState::with_filter(items, filter);
        state.apply(CatalogEvent::SetViewMode(self.config.ui.default_view));
        state
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('b') => Action::Menu(MenuEvent::ToggleAppSwitcher),
            KeyCode::Char('m') => Action::Menu(MenuEvent::ToggleMobile),
            KeyCode::F(10) => Action::Menu(MenuEvent::OpenFirstMenu),
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn set_icons(&mut self, icons: IconService) {
        self.menu_bar.icons = icons.clone();
        self.catalog.icons = icons.clone();
        self.dialog.icons = icons.clone();
        self.icons = icons;
    }

    /// Handle app-level actions. Returns a follow-up action, if any.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::CatalogLoaded(items) => {
                self.logger.log(format!("Catalog: loaded {} items", items.len()));
                let state = self.initial_catalog(items);
                self.catalog.load(state);
                Action::None
            }
            Action::CatalogLoadFailed(error) => {
                self.logger.log(format!("Catalog: load failed: {}", error));
                self.fatal_error = Some(error);
                self.should_quit = true;
                Action::None
            }
            Action::CartUpdated(count) => {
                self.logger.log(format!("Cart: now holds {} items", count));
                self.status.cart_count = count;
                Action::None
            }
            Action::RunMenuOutcome(outcome) => {
                self.logger.log(format!("Menu: performing {:?}", outcome));
                if let Some(Dispatch::Unbound) = perform(outcome, &mut self.commands, &mut self.navigator) {
                    self.logger.log("Menu: command has no handler".to_string());
                }
                Action::None
            }
            Action::NavigateHome => {
                self.logger.log("Navigation: home".to_string());
                self.status.message = None;
                Action::Menu(MenuEvent::DismissAll)
            }
            Action::OpenExternal(url) => {
                self.logger.log(format!("Navigation: opening {}", url));
                if launch_browser(&self.config.links.browser_command, &url) {
                    Action::None
                } else {
                    Action::ShowDialog(DialogType::Error(format!("Could not open {}", url)))
                }
            }
            Action::SignIn => {
                let session = Session::signed_in(self.config.session.handle.clone());
                self.logger.log(format!("Session: signed in ({:?})", session.handle()));
                self.menu_bar.set_session(session);
                Action::None
            }
            Action::SignOut => {
                self.logger.log("Session: signed out".to_string());
                self.menu_bar.set_session(Session::signed_out());
                Action::ShowDialog(DialogType::Info(INFO_SIGNED_OUT.to_string()))
            }
            Action::NewDocument => Action::ShowDialog(DialogType::Info(INFO_NEW_DOCUMENT.to_string())),
            Action::SaveDocument => Action::ShowDialog(DialogType::Info(INFO_DOCUMENT_SAVED.to_string())),
            Action::ToggleAiAssistant => {
                self.status.ai_assistant = !self.status.ai_assistant;
                let state = if self.status.ai_assistant { "on" } else { "off" };
                self.logger.log(format!("AI assistant turned {}", state));
                self.status.message = Some(format!("AI Assistant {}", state));
                Action::None
            }
            Action::PlatformCommand(command) => {
                self.logger.log(format!("Platform command: {}", command));
                self.status.message = Some(format!("Sent {} to the editor", command));
                Action::None
            }
            Action::CycleIconTheme => {
                let mut icons = self.icons.clone();
                icons.cycle_icon_theme();
                self.logger.log(format!("Icons: switched to {:?}", icons.theme()));
                self.set_icons(icons);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Run `action` and everything it triggers, including actions queued by
    /// command handlers and the navigator.
    pub fn process_action(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            if !matches!(action, Action::None) {
                let action = self.update(action);
                let follow_up = self.handle_app_action(action);
                queue.push_back(follow_up);
            }
            while let Ok(pending) = self.action_rx.try_recv() {
                queue.push_back(pending);
            }
        }
        self.status.wishlist_count = self.catalog.state().map_or(0, |state| state.wishlist().len());
    }

    /// Drain actions sent by background tasks
    pub fn process_background_actions(&mut self) {
        self.process_action(Action::None);
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        // Menus draw above the detail modal and take keys first
        if self.menu_bar.is_open() {
            return self.menu_bar.handle_key_events(key);
        }
        if self.catalog.detail_open() {
            return self.catalog.handle_key_events(key);
        }
        if self.catalog.is_capturing_input() {
            return self.catalog.handle_key_events(key);
        }
        match self.catalog.handle_key_events(key) {
            Action::None => self.handle_global_key(key),
            action => action,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) if self.config.ui.mouse_enabled => {
                if self.dialog.is_visible() {
                    self.dialog.handle_mouse_events(mouse)
                } else {
                    match self.menu_bar.handle_mouse(mouse) {
                        Some(action) => action,
                        None => {
                            // Outside click: close the menus, then let the click through
                            if mouse.kind == MouseEventKind::Down(MouseButton::Left) && self.menu_bar.is_open() {
                                self.process_action(Action::Menu(MenuEvent::DismissAll));
                            }
                            self.catalog.handle_mouse_events(mouse)
                        }
                    }
                }
            }
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.process_action(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.menu_bar.update(action);

        // Return for app-level handling
        self.catalog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [bar, content, status] = LayoutManager::main_layout(rect);

        self.catalog.render(f, content);
        self.menu_bar.render(f, bar);
        StatusBar::render(f, status, &self.status, &self.icons);

        if self.catalog.detail_open() {
            self.catalog.render_detail(f, content);
        }
        self.menu_bar.render_overlay(f, rect);

        // Render dialog on top if visible (includes help dialog)
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
