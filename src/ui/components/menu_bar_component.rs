//! Application menu bar with its dropdowns and overlays.
//!
//! The component is a thin shell over [`MenuController`]: input becomes
//! `Action::Menu(event)`, and [`Component::update`] turns that into
//! `Action::RunMenuOutcome` for the app to perform.

use crate::constants::{APP_NAME, APP_SUITE_NAME, APP_SYMBOL, DOUBLE_CLICK_MS, SOCIAL_LINK_LABEL};
use crate::icons::IconService;
use crate::menu::{
    connection_status, default_apps, MenuBarState, MenuController, MenuEntry, MenuEvent, MenuTable, Session,
};
use crate::ui::components::badge::create_app_badge;
use crate::ui::components::dialogs::common::create_dialog_block;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{hex_or_default, DEFAULT_COLOR};
use crate::utils::text::truncate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const APPS_LABEL: &str = " Apps ▾ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuHit {
    AppsButton,
    Logo,
    Title,
    Hamburger,
    Social,
    MenuLabel(String),
    Entry(usize),
    App(usize),
    MobileEntry(usize),
}

fn text_width(text: &str) -> u16 {
    Span::raw(text).width() as u16
}

pub struct MenuBarComponent {
    controller: MenuController,
    session: Session,
    social_url: String,
    issues_url: String,
    compact_width: u16,
    compact: bool,
    pub icons: IconService,
    bar_area: Rect,
    hits: Vec<(Rect, MenuHit)>,
    /// Bar row plus every open overlay; clicks elsewhere dismiss
    root: Vec<Rect>,
    last_logo_click: Option<Instant>,
}

impl MenuBarComponent {
    pub fn new(session: Session, social_url: String, issues_url: String, compact_width: u16) -> Self {
        let table = MenuTable::standard(session.authenticated, &issues_url);
        Self {
            controller: MenuController::new(table, default_apps()),
            session,
            social_url,
            issues_url,
            compact_width,
            compact: false,
            icons: IconService::default(),
            bar_area: Rect::default(),
            hits: Vec::new(),
            root: Vec::new(),
            last_logo_click: None,
        }
    }

    pub fn state(&self) -> &MenuBarState {
        self.controller.state()
    }

    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the last render used the narrow layout
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_open(&self) -> bool {
        self.controller.state().anything_open()
    }

    /// Swap the session and rebuild the table (Sign In / Sign Out entry)
    pub fn set_session(&mut self, session: Session) {
        if session.authenticated != self.session.authenticated {
            self.controller
                .set_table(MenuTable::standard(session.authenticated, &self.issues_url));
        }
        self.session = session;
    }

    /// Logo click at `now`. The second click inside the window goes home.
    pub fn register_logo_click(&mut self, now: Instant) -> Action {
        let window = Duration::from_millis(DOUBLE_CLICK_MS);
        match self.last_logo_click {
            Some(previous) if now.saturating_duration_since(previous) <= window => {
                self.last_logo_click = None;
                Action::NavigateHome
            }
            _ => {
                self.last_logo_click = Some(now);
                Action::None
            }
        }
    }

    fn in_root(&self, column: u16, row: u16) -> bool {
        self.root.iter().any(|area| LayoutManager::contains(*area, column, row))
    }

    fn hit_at(&self, column: u16, row: u16) -> Option<MenuHit> {
        self.hits
            .iter()
            .rev()
            .find(|(area, _)| LayoutManager::contains(*area, column, row))
            .map(|(_, hit)| hit.clone())
    }

    fn activate(&mut self, hit: MenuHit) -> Action {
        match hit {
            MenuHit::AppsButton => Action::Menu(MenuEvent::ToggleAppSwitcher),
            MenuHit::Logo => self.register_logo_click(Instant::now()),
            MenuHit::Title => Action::NavigateHome,
            MenuHit::Hamburger => Action::Menu(MenuEvent::ToggleMobile),
            MenuHit::Social => Action::OpenExternal(self.social_url.clone()),
            MenuHit::MenuLabel(label) => Action::Menu(MenuEvent::ToggleMenu(label)),
            MenuHit::Entry(index) => Action::Menu(MenuEvent::ActivateEntry(index)),
            MenuHit::App(index) => Action::Menu(MenuEvent::ActivateApp(index)),
            MenuHit::MobileEntry(index) => Action::Menu(MenuEvent::ActivateMobileEntry(index)),
        }
    }

    /// Mouse input. `None` means the event is outside the bar and its
    /// overlays and belongs to whatever is underneath.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let inside = self.in_root(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                Some(match self.hit_at(mouse.column, mouse.row) {
                    Some(hit) => self.activate(hit),
                    None => Action::None,
                })
            }
            MouseEventKind::Moved if inside => Some(match self.hit_at(mouse.column, mouse.row) {
                Some(MenuHit::MenuLabel(label)) => Action::Menu(MenuEvent::HoverMenu(label)),
                _ => Action::None,
            }),
            MouseEventKind::ScrollDown if inside && self.is_open() => Some(Action::Menu(MenuEvent::HighlightNext)),
            MouseEventKind::ScrollUp if inside && self.is_open() => Some(Action::Menu(MenuEvent::HighlightPrevious)),
            _ if inside => Some(Action::None),
            _ => None,
        }
    }

    fn push_segment(&mut self, spans: &mut Vec<Span<'static>>, x: &mut u16, text: String, style: Style, hit: Option<MenuHit>) {
        let width = text_width(&text);
        if *x + width > self.bar_area.right() {
            return;
        }
        if let Some(hit) = hit {
            self.hits.push((Rect::new(*x, self.bar_area.y, width, 1), hit));
        }
        spans.push(Span::styled(text, style));
        *x += width;
    }

    fn render_wide_bar(&mut self, f: &mut Frame) {
        let area = self.bar_area;
        let state = self.controller.state().clone();
        let mut spans = Vec::new();
        let mut x = area.x;

        self.push_segment(
            &mut spans,
            &mut x,
            format!(" {APP_SYMBOL} "),
            Style::default().fg(DEFAULT_COLOR).add_modifier(Modifier::BOLD),
            Some(MenuHit::Logo),
        );
        let apps_style = if state.app_switcher_open {
            Style::default().fg(Color::Black).bg(DEFAULT_COLOR)
        } else {
            Style::default().fg(Color::White)
        };
        self.push_segment(&mut spans, &mut x, APPS_LABEL.to_string(), apps_style, Some(MenuHit::AppsButton));

        let labels: Vec<String> = self.controller.table().labels().into_iter().map(str::to_string).collect();
        for (index, label) in labels.into_iter().enumerate() {
            let open = state.open_menu.as_deref() == Some(label.as_str());
            let mut style = if open {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            if index == 0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            self.push_segment(&mut spans, &mut x, format!(" {label} "), style, Some(MenuHit::MenuLabel(label)));
        }

        let status = connection_status(&self.session);
        let status_text = format!(" {} {} ", self.icons.connection(status.is_connected()), status);
        let social_text = format!(" {SOCIAL_LINK_LABEL} ");
        let right_width = text_width(&status_text) + text_width(&social_text);
        if x + right_width <= area.right() {
            let mut rx = area.right() - right_width;
            if rx > x {
                spans.push(Span::raw(" ".repeat(usize::from(rx - x))));
            }
            let status_color = if status.is_connected() { Color::Green } else { Color::Gray };
            self.push_segment(&mut spans, &mut rx, status_text, Style::default().fg(status_color), None);
            self.push_segment(
                &mut spans,
                &mut rx,
                social_text,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
                Some(MenuHit::Social),
            );
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30))),
            area,
        );
    }

    fn render_compact_bar(&mut self, f: &mut Frame) {
        let area = self.bar_area;
        let state = self.controller.state().clone();
        let mut spans = Vec::new();
        let mut x = area.x;

        let apps_style = if state.app_switcher_open {
            Style::default().fg(Color::Black).bg(DEFAULT_COLOR)
        } else {
            Style::default().fg(Color::White)
        };
        self.push_segment(&mut spans, &mut x, APPS_LABEL.to_string(), apps_style, Some(MenuHit::AppsButton));

        let hamburger = format!(" {} ", self.icons.hamburger(state.mobile_open));
        let hamburger_width = text_width(&hamburger);
        let title_room = usize::from(area.right().saturating_sub(x + hamburger_width));
        let title = truncate(&format!(" {APP_SYMBOL} {APP_NAME} "), title_room);
        self.push_segment(
            &mut spans,
            &mut x,
            title,
            Style::default().fg(DEFAULT_COLOR).add_modifier(Modifier::BOLD),
            Some(MenuHit::Title),
        );

        if x + hamburger_width <= area.right() {
            let mut rx = area.right() - hamburger_width;
            if rx > x {
                spans.push(Span::raw(" ".repeat(usize::from(rx - x))));
            }
            self.push_segment(
                &mut spans,
                &mut rx,
                hamburger,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Some(MenuHit::Hamburger),
            );
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30))),
            area,
        );
    }

    fn anchor_of(&self, wanted: &MenuHit) -> u16 {
        self.hits
            .iter()
            .find(|(_, hit)| hit == wanted)
            .map_or(self.bar_area.x, |(area, _)| area.x)
    }

    fn entry_line(&self, entry: &MenuEntry, width: u16, highlighted: bool) -> Line<'static> {
        let inner = usize::from(width);
        match entry {
            MenuEntry::Divider => Line::from(Span::styled("─".repeat(inner), Style::default().fg(Color::DarkGray))),
            MenuEntry::Action { label, shortcut, icon, .. } => {
                let text = match icon {
                    Some(icon) => format!(" {icon} {label}"),
                    None => format!(" {label}"),
                };
                let shortcut = shortcut.map(|s| format!("{s} ")).unwrap_or_default();
                let pad = inner.saturating_sub(text_width(&text) as usize + text_width(&shortcut) as usize);
                let style = if highlighted {
                    Style::default().fg(Color::Black).bg(DEFAULT_COLOR)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{text}{}", " ".repeat(pad)), style),
                    Span::styled(shortcut, style.fg(if highlighted { Color::Black } else { Color::DarkGray })),
                ])
            }
            MenuEntry::Link { label, .. } => {
                let text = format!(" {label} ↗");
                let pad = inner.saturating_sub(text_width(&text) as usize);
                let style = if highlighted {
                    Style::default().fg(Color::Black).bg(DEFAULT_COLOR)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(Span::styled(format!("{text}{}", " ".repeat(pad)), style))
            }
        }
    }

    fn render_dropdown(&mut self, f: &mut Frame, screen: Rect, label: &str) {
        let Some(menu) = self.controller.table().get(label).cloned() else {
            return;
        };
        let highlighted = self.controller.state().highlighted;

        let content_width = menu
            .entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Action { label, shortcut, icon, .. } => {
                    let icon_width = icon.map_or(0, |i| text_width(i) + 1);
                    let shortcut_width = shortcut.map_or(0, |s| text_width(s) + 3);
                    1 + icon_width + text_width(label) + shortcut_width + 1
                }
                MenuEntry::Link { label, .. } => text_width(label) + 4,
                MenuEntry::Divider => 0,
            })
            .max()
            .unwrap_or(0)
            .max(20);

        let anchor = self.anchor_of(&MenuHit::MenuLabel(label.to_string()));
        let area = LayoutManager::dropdown_rect(
            anchor,
            self.bar_area.bottom(),
            content_width + 2,
            menu.entries.len() as u16 + 2,
            screen,
        );
        self.render_list_overlay(f, area, None, &menu.entries, highlighted, MenuHit::Entry);
    }

    /// Bordered list of entries with one hit per interactive row
    fn render_list_overlay(
        &mut self,
        f: &mut Frame,
        area: Rect,
        title: Option<&str>,
        entries: &[MenuEntry],
        highlighted: Option<usize>,
        to_hit: fn(usize) -> MenuHit,
    ) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        f.render_widget(Clear, area);
        let block = create_dialog_block(title.map(str::to_string).unwrap_or_default(), Color::Gray);
        let inner = block.inner(area);
        f.render_widget(block, area);
        self.root.push(area);

        for (index, entry) in entries.iter().enumerate().take(usize::from(inner.height)) {
            let row = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            let line = self.entry_line(entry, inner.width, highlighted == Some(index));
            f.render_widget(Paragraph::new(line), row);
            if entry.is_interactive() {
                self.hits.push((row, to_hit(index)));
            }
        }
    }

    fn render_app_switcher(&mut self, f: &mut Frame, screen: Rect) {
        let apps = self.controller.apps().to_vec();
        let highlight = self.controller.state().app_highlight;

        let width = apps
            .iter()
            .map(|app| text_width(&app.name) + 14)
            .max()
            .unwrap_or(20)
            .max(text_width(APP_SUITE_NAME) + 6);
        let available = screen.bottom().saturating_sub(self.bar_area.bottom());
        let height = (apps.len() as u16 + 2).min(available);
        let anchor = self.anchor_of(&MenuHit::AppsButton);
        let area = LayoutManager::dropdown_rect(anchor, self.bar_area.bottom(), width, height, screen);
        if area.width < 3 || area.height < 3 {
            return;
        }

        f.render_widget(Clear, area);
        let block = create_dialog_block(format!(" {APP_SUITE_NAME} "), DEFAULT_COLOR);
        let inner = block.inner(area);
        f.render_widget(block, area);
        self.root.push(area);

        let rows = usize::from(inner.height);
        let offset = (highlight + 1).saturating_sub(rows);
        for (row_index, (index, app)) in apps.iter().enumerate().skip(offset).take(rows).enumerate() {
            let row = Rect::new(inner.x, inner.y + row_index as u16, inner.width, 1);
            let selected = index == highlight;
            let name_style = match (selected, app.disabled) {
                (true, _) => Style::default().fg(Color::Black).bg(Color::White),
                (false, true) => Style::default().fg(Color::DarkGray),
                (false, false) => Style::default().fg(Color::White),
            };
            let mut spans = vec![
                Span::styled(format!(" {APP_SYMBOL} "), Style::default().fg(hex_or_default(&app.color))),
                Span::styled(app.name.clone(), name_style),
            ];
            if let Some(badge) = app.badge() {
                spans.push(Span::raw(" "));
                spans.push(create_app_badge(badge));
            }
            f.render_widget(Paragraph::new(Line::from(spans)), row);
            self.hits.push((row, MenuHit::App(index)));
        }
    }

    fn render_mobile(&mut self, f: &mut Frame, screen: Rect) {
        let table = self.controller.table().clone();
        let highlight = self.controller.state().mobile_highlight;

        let width = 40u16.min(screen.width);
        let top = self.bar_area.bottom();
        let height = screen.bottom().saturating_sub(top);
        let area = Rect::new(screen.right() - width, top, width, height);
        if area.width < 3 || area.height < 4 {
            return;
        }

        f.render_widget(Clear, area);
        let block = create_dialog_block(format!(" {APP_NAME} "), DEFAULT_COLOR);
        let inner = block.inner(area);
        f.render_widget(block, area);
        self.root.push(area);

        let status = connection_status(&self.session);
        let status_line = Line::from(vec![
            Span::styled(
                format!(" {} {}", self.icons.connection(status.is_connected()), status),
                Style::default().fg(if status.is_connected() { Color::Green } else { Color::Gray }),
            ),
            Span::raw("  "),
            Span::styled(
                SOCIAL_LINK_LABEL,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        f.render_widget(Paragraph::new(status_line), Rect::new(inner.x, inner.y, inner.width, 1));
        let social_x = inner.x + text_width(&format!(" {} {}", self.icons.connection(status.is_connected()), status)) + 2;
        if social_x < inner.right() {
            let social_width = text_width(SOCIAL_LINK_LABEL).min(inner.right() - social_x);
            self.hits.push((Rect::new(social_x, inner.y, social_width, 1), MenuHit::Social));
        }

        // Rows: a header per menu followed by its entries
        let mut rows: Vec<(Option<usize>, Line<'static>)> = Vec::new();
        let mut flat_index = 0;
        for menu in table.menus() {
            rows.push((
                None,
                Line::from(Span::styled(
                    menu.label.clone(),
                    Style::default().fg(DEFAULT_COLOR).add_modifier(Modifier::BOLD),
                )),
            ));
            for entry in &menu.entries {
                let line = self.entry_line(entry, inner.width, highlight == flat_index);
                let index = entry.is_interactive().then_some(flat_index);
                rows.push((index, line));
                flat_index += 1;
            }
        }

        let list_top = inner.y + 2;
        let visible = usize::from(inner.bottom().saturating_sub(list_top));
        if visible == 0 {
            return;
        }
        let highlighted_row = rows
            .iter()
            .position(|(index, _)| *index == Some(highlight))
            .unwrap_or(0);
        let offset = (highlighted_row + 1).saturating_sub(visible);

        for (row_index, (index, line)) in rows.into_iter().skip(offset).take(visible).enumerate() {
            let row = Rect::new(inner.x, list_top + row_index as u16, inner.width, 1);
            f.render_widget(Paragraph::new(line), row);
            if let Some(index) = index {
                self.hits.push((row, MenuHit::MobileEntry(index)));
            }
        }
    }

    /// Draw whichever dropdown or overlay is open on top of `screen`
    pub fn render_overlay(&mut self, f: &mut Frame, screen: Rect) {
        let state = self.controller.state().clone();
        if let Some(label) = &state.open_menu {
            self.render_dropdown(f, screen, label);
        } else if state.app_switcher_open {
            self.render_app_switcher(f, screen);
        } else if state.mobile_open {
            self.render_mobile(f, screen);
        }
    }
}

impl Component for MenuBarComponent {
    /// Only consulted while something is open
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let state = self.controller.state();
        if !state.anything_open() {
            return Action::None;
        }
        let menu_open = state.open_menu.is_some();
        match key.code {
            KeyCode::Esc | KeyCode::F(10) => Action::Menu(MenuEvent::DismissAll),
            KeyCode::Left | KeyCode::Char('h') if menu_open => Action::Menu(MenuEvent::PreviousMenu),
            KeyCode::Right | KeyCode::Char('l') if menu_open => Action::Menu(MenuEvent::NextMenu),
            KeyCode::Up | KeyCode::Char('k') => Action::Menu(MenuEvent::HighlightPrevious),
            KeyCode::Down | KeyCode::Char('j') => Action::Menu(MenuEvent::HighlightNext),
            KeyCode::Enter | KeyCode::Char(' ') => Action::Menu(MenuEvent::ActivateHighlighted),
            KeyCode::Char('b') => Action::Menu(MenuEvent::ToggleAppSwitcher),
            KeyCode::Char('m') => Action::Menu(MenuEvent::ToggleMobile),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.handle_mouse(mouse).unwrap_or(Action::None)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Menu(event) => Action::RunMenuOutcome(self.controller.apply(event)),
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.hits.clear();
        self.root.clear();
        self.bar_area = rect;
        self.root.push(rect);
        self.compact = rect.width < self.compact_width;
        if self.compact {
            self.render_compact_bar(f);
        } else {
            self.render_wide_bar(f);
        }
    }
}
