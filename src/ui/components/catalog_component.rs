//! Storefront: search header, filter panel, result grid/list and the item
//! detail modal.
//!
//! The component owns the [`CatalogState`] and applies `Action::Catalog`
//! events to it in [`Component::update`]. Cart changes come back out as
//! `Action::CartUpdated(n)`.
//!
//! Mouse input is hit-tested against the rectangles recorded during the last
//! render. Rectangles are tested last-drawn first, so controls drawn on top
//! of a card (heart, cart, preview) take their own clicks and never select
//! the card underneath.

use crate::catalog::{CatalogEffect, CatalogEvent, CatalogState, Item, ViewMode};
use crate::constants::{LOADING_CATALOG, NO_RESULTS_HINT, NO_RESULTS_TITLE, SEARCH_PLACEHOLDER, STORE_TITLE};
use crate::icons::IconService;
use crate::ui::components::badge::{create_item_badges, create_price_spans, create_rating_spans};
use crate::ui::components::dialogs::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, create_scrollbar, shortcuts,
};
use crate::ui::components::filter_panel::{FilterPanel, FilterRow};
use crate::ui::core::{Action, Component, DialogType};
use crate::ui::layout::LayoutManager;
use crate::utils::text::{truncate, wrap};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, ScrollbarState},
    Frame,
};

/// Which part of the storefront receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Results,
    Search,
    Filters,
}

/// Clickable regions recorded while rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogHit {
    Search,
    FilterToggle,
    SortCycle,
    ViewGrid,
    ViewList,
    Card(String),
    CardCart(String),
    CardWishlist(String),
    CardPreview(String),
    Filter(FilterRow),
    DetailBackdrop,
    DetailBody,
    DetailClose,
    DetailCart(String),
    DetailWishlist(String),
}

pub struct CatalogComponent {
    state: Option<CatalogState>,
    focus: Focus,
    show_filters: bool,
    filter_panel: FilterPanel,
    /// Position of the keyboard cursor in the visible set
    cursor: usize,
    /// First visible row of results
    scroll: usize,
    columns: usize,
    page_rows: usize,
    hits: Vec<(Rect, CatalogHit)>,
    detail_hits: Vec<(Rect, CatalogHit)>,
    scrollbar_state: ScrollbarState,
    pub icons: IconService,
}

impl Default for CatalogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogComponent {
    pub fn new() -> Self {
        Self {
            state: None,
            focus: Focus::Results,
            show_filters: false,
            filter_panel: FilterPanel::new(),
            cursor: 0,
            scroll: 0,
            columns: 1,
            page_rows: 1,
            hits: Vec::new(),
            detail_hits: Vec::new(),
            scrollbar_state: ScrollbarState::new(0),
            icons: IconService::default(),
        }
    }

    /// Install a freshly loaded catalog
    pub fn load(&mut self, state: CatalogState) {
        self.state = Some(state);
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn state(&self) -> Option<&CatalogState> {
        self.state.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn filters_visible(&self) -> bool {
        self.show_filters
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True while the search box swallows every key
    pub fn is_capturing_input(&self) -> bool {
        self.focus == Focus::Search && !self.detail_open()
    }

    pub fn detail_open(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.selected().is_some())
    }

    fn cursor_item(&self) -> Option<&Item> {
        self.state.as_ref()?.visible_at(self.cursor)
    }

    fn cursor_id(&self) -> Option<String> {
        self.cursor_item().map(|item| item.id.clone())
    }

    fn step(&self) -> usize {
        match self.state.as_ref().map(CatalogState::view_mode) {
            Some(ViewMode::Grid) => self.columns.max(1),
            _ => 1,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let Some(state) = &self.state else {
            return;
        };
        let len = state.visible_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_cursor(&mut self) {
        let len = self.state.as_ref().map_or(0, CatalogState::visible_len);
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Keep the cursor row inside the visible page
    fn ensure_cursor_visible(&mut self) {
        let row = self.cursor / self.step();
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + self.page_rows.max(1) {
            self.scroll = row + 1 - self.page_rows.max(1);
        }
    }

    fn catalog(event: CatalogEvent) -> Action {
        Action::Catalog(event)
    }

    fn select_neighbour(&self, forward: bool) -> Action {
        let Some(state) = &self.state else {
            return Action::None;
        };
        let len = state.visible_len();
        if len == 0 {
            return Action::None;
        }
        let target = match state.selected().and_then(|item| state.visible_position(&item.id)) {
            Some(position) if forward => (position + 1).min(len - 1),
            Some(position) => position.saturating_sub(1),
            None => 0,
        };
        match state.visible_at(target) {
            Some(item) => Self::catalog(CatalogEvent::Select(item.id.clone())),
            None => Action::None,
        }
    }

    fn preview(&self, id: &str) -> Action {
        let Some(item) = self.state.as_ref().and_then(|s| s.item(id)) else {
            return Action::None;
        };
        match &item.preview_url {
            Some(url) => Action::OpenExternal(url.clone()),
            None => Action::ShowDialog(DialogType::Info(format!("No preview available for '{}'", item.title))),
        }
    }

    fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
        self.focus = if self.show_filters { Focus::Filters } else { Focus::Results };
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Action {
        let Some(id) = self.state.as_ref().and_then(|s| s.selected()).map(|item| item.id.clone()) else {
            return Action::None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => Self::catalog(CatalogEvent::CloseDetail),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('c') => Self::catalog(CatalogEvent::ToggleCart(id)),
            KeyCode::Char('w') => Self::catalog(CatalogEvent::ToggleWishlist(id)),
            KeyCode::Char('o') => self.preview(&id),
            KeyCode::Char('n') | KeyCode::Right => self.select_neighbour(true),
            KeyCode::Char('p') | KeyCode::Left => self.select_neighbour(false),
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        let query = self.state.as_ref().map(|s| s.filter().query.clone()).unwrap_or_default();
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::Results;
                Action::None
            }
            KeyCode::Backspace => {
                let mut query = query;
                query.pop();
                Self::catalog(CatalogEvent::SetQuery(query))
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::catalog(CatalogEvent::SetQuery(String::new()))
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(c) => Self::catalog(CatalogEvent::SetQuery(format!("{query}{c}"))),
            _ => Action::None,
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Action {
        let Some(state) = &self.state else {
            return Action::None;
        };
        // Modified keys belong to the global handler
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }
        let step = self.step() as isize;
        let page = (self.page_rows.max(1) * self.step()) as isize;
        match key.code {
            KeyCode::Char('/') => {
                self.focus = Focus::Search;
                Action::None
            }
            KeyCode::Char('f') => {
                self.toggle_filters();
                Action::None
            }
            KeyCode::Tab if self.show_filters => {
                self.focus = Focus::Filters;
                Action::None
            }
            KeyCode::Char('s') => Self::catalog(CatalogEvent::SetSort(state.filter().sort.next())),
            KeyCode::Char('v') => {
                let mode = match state.view_mode() {
                    ViewMode::Grid => ViewMode::List,
                    ViewMode::List => ViewMode::Grid,
                };
                Self::catalog(CatalogEvent::SetViewMode(mode))
            }
            KeyCode::Char('r') => Self::catalog(CatalogEvent::ResetFilters),
            KeyCode::Enter => match self.cursor_id() {
                Some(id) => Self::catalog(CatalogEvent::Select(id)),
                None => Action::None,
            },
            KeyCode::Char('c') => match self.cursor_id() {
                Some(id) => Self::catalog(CatalogEvent::ToggleCart(id)),
                None => Action::None,
            },
            KeyCode::Char('w') => match self.cursor_id() {
                Some(id) => Self::catalog(CatalogEvent::ToggleWishlist(id)),
                None => Action::None,
            },
            KeyCode::Char('o') => match self.cursor_id() {
                Some(id) => self.preview(&id),
                None => Action::None,
            },
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-step);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(step);
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.move_cursor(-1);
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.move_cursor(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.move_cursor(-page);
                Action::None
            }
            KeyCode::PageDown => {
                self.move_cursor(page);
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = state.visible_len().saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_hit(&mut self, hit: CatalogHit, area: Rect, column: u16) -> Action {
        if hit != CatalogHit::Search && self.focus == Focus::Search {
            self.focus = Focus::Results;
        }
        let Some(state) = &self.state else {
            return Action::None;
        };
        match hit {
            CatalogHit::Search => {
                self.focus = Focus::Search;
                Action::None
            }
            CatalogHit::FilterToggle => {
                self.toggle_filters();
                Action::None
            }
            CatalogHit::SortCycle => Self::catalog(CatalogEvent::SetSort(state.filter().sort.next())),
            CatalogHit::ViewGrid => Self::catalog(CatalogEvent::SetViewMode(ViewMode::Grid)),
            CatalogHit::ViewList => Self::catalog(CatalogEvent::SetViewMode(ViewMode::List)),
            CatalogHit::Card(id) => {
                if let Some(position) = state.visible_position(&id) {
                    self.cursor = position;
                }
                Self::catalog(CatalogEvent::Select(id))
            }
            CatalogHit::CardCart(id) | CatalogHit::DetailCart(id) => Self::catalog(CatalogEvent::ToggleCart(id)),
            CatalogHit::CardWishlist(id) | CatalogHit::DetailWishlist(id) => {
                Self::catalog(CatalogEvent::ToggleWishlist(id))
            }
            CatalogHit::CardPreview(id) => self.preview(&id),
            CatalogHit::Filter(row) => {
                self.focus = Focus::Filters;
                let filter = state.filter().clone();
                self.filter_panel.click(row, area, column, &filter)
            }
            CatalogHit::DetailBackdrop | CatalogHit::DetailClose => Self::catalog(CatalogEvent::CloseDetail),
            CatalogHit::DetailBody => Action::None,
        }
    }

    fn hit_test(hits: &[(Rect, CatalogHit)], column: u16, row: u16) -> Option<(Rect, CatalogHit)> {
        hits.iter()
            .rev()
            .find(|(rect, _)| LayoutManager::contains(*rect, column, row))
            .cloned()
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect) {
        let search_width = (area.width * 3 / 5).max(20).min(area.width);
        let search_area = Rect::new(area.x, area.y, search_width, area.height);
        let toolbar_area = Rect::new(
            area.x + search_width,
            area.y,
            area.width.saturating_sub(search_width),
            area.height,
        );

        let query = self.state.as_ref().map(|s| s.filter().query.as_str()).unwrap_or("");
        let search_icon = self.icons.icons().ui.search;
        let focused = self.focus == Focus::Search;
        let search = create_input_paragraph(query, SEARCH_PLACEHOLDER, focused)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {search_icon} Search "))
                    .style(Style::default().fg(if focused { Color::Yellow } else { Color::Gray })),
            );
        f.render_widget(search, search_area);
        self.hits.push((search_area, CatalogHit::Search));

        if toolbar_area.width < 4 {
            return;
        }
        let Some(state) = &self.state else {
            return;
        };

        let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);
        let inner = block.inner(toolbar_area);
        f.render_widget(block, toolbar_area);

        let filters_label = format!("{} Filters", self.icons.icons().ui.filters);
        let sort_label = format!("{} ▾", state.filter().sort.label());
        let (grid_style, list_style) = match state.view_mode() {
            ViewMode::Grid => (
                Style::default().fg(Color::Black).bg(Color::Cyan),
                Style::default().fg(Color::Gray),
            ),
            ViewMode::List => (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
        };
        let filters_style = if self.show_filters {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let controls = [
            (filters_label, filters_style, CatalogHit::FilterToggle),
            (sort_label, Style::default().fg(Color::White), CatalogHit::SortCycle),
            ("Grid".to_string(), grid_style, CatalogHit::ViewGrid),
            ("List".to_string(), list_style, CatalogHit::ViewList),
        ];

        let mut spans = Vec::new();
        let mut x = inner.x;
        for (label, style, hit) in controls {
            let width = label.chars().count() as u16 + 2;
            if x + width > inner.right() {
                break;
            }
            self.hits.push((Rect::new(x, inner.y, width, 1), hit));
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw(" "));
            x += width + 1;
        }
        f.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect) {
        let Some(state) = self.state.take() else {
            return;
        };

        let mut title = vec![Span::styled(
            format!("{} ({} results)", STORE_TITLE, state.visible_len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(category) = state.filter().category {
            title.push(Span::styled(
                format!("  Category: {}", category.label()),
                Style::default().fg(Color::Cyan),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(title)), Rect::new(area.x, area.y, area.width, 1));

        let list_area = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));

        if state.visible_len() == 0 {
            let message = vec![
                Line::from(""),
                Line::from(Span::styled(
                    NO_RESULTS_TITLE,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(NO_RESULTS_HINT, Style::default().fg(Color::Gray))),
            ];
            f.render_widget(Paragraph::new(message).alignment(Alignment::Center), list_area);
            self.state = Some(state);
            return;
        }

        match state.view_mode() {
            ViewMode::Grid => self.render_grid(f, list_area, &state),
            ViewMode::List => self.render_list(f, list_area, &state),
        }
        self.state = Some(state);
    }

    fn render_grid(&mut self, f: &mut Frame, area: Rect, state: &CatalogState) {
        self.columns = LayoutManager::grid_columns(area.width);
        self.page_rows = LayoutManager::grid_rows(area.height);
        self.ensure_cursor_visible();

        let total_rows = state.visible_len().div_ceil(self.columns);
        let first = self.scroll * self.columns;
        for (offset, item) in state.visible().skip(first).take(self.columns * self.page_rows).enumerate() {
            let rect = LayoutManager::card_rect(area, self.columns, offset / self.columns, offset % self.columns);
            if rect.height < 3 {
                continue;
            }
            let highlighted = first + offset == self.cursor && self.focus == Focus::Results;
            self.render_card(f, rect, item, state, highlighted);
        }

        self.render_scrollbar(f, area, total_rows);
    }

    fn render_card(&mut self, f: &mut Frame, rect: Rect, item: &Item, state: &CatalogState, highlighted: bool) {
        let border_color = if highlighted { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.hits.push((rect, CatalogHit::Card(item.id.clone())));

        let width = inner.width as usize;
        let meta = format!("{} • {} pages ", item.format.label(), item.pages);
        let mut meta_line = vec![Span::styled(meta, Style::default().fg(Color::Gray))];
        meta_line.extend(create_item_badges(item, &self.icons));

        let lines = vec![
            Line::from(Span::styled(
                truncate(&item.title, width),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&format!("by {}", item.author), width),
                Style::default().fg(Color::Gray),
            )),
            Line::from(create_rating_spans(item, &self.icons)),
            Line::from(create_price_spans(item)),
            Line::from(meta_line),
        ];
        let text_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
        f.render_widget(Paragraph::new(lines), text_area);

        if inner.height >= 2 {
            let controls_y = inner.bottom() - 1;
            self.render_item_controls(f, inner.x, controls_y, inner.right(), item, state);
        }
    }

    /// Heart, cart and preview controls on one line starting at `x`
    fn render_item_controls(&mut self, f: &mut Frame, x: u16, y: u16, right: u16, item: &Item, state: &CatalogState) {
        let in_cart = state.in_cart(&item.id);
        let wished = state.in_wishlist(&item.id);

        let heart = format!("[{}]", self.icons.wishlist(wished));
        let cart_label = if in_cart { "Remove from Cart" } else { "Add to Cart" };
        let cart = format!("[{} {}]", self.icons.cart(in_cart), cart_label);
        let preview = format!("[{}]", self.icons.icons().item.preview);

        let controls = [
            (
                heart,
                Style::default().fg(if wished { Color::Magenta } else { Color::Gray }),
                CatalogHit::CardWishlist(item.id.clone()),
            ),
            (
                cart,
                Style::default().fg(if in_cart { Color::Green } else { Color::White }),
                CatalogHit::CardCart(item.id.clone()),
            ),
            (preview, Style::default().fg(Color::Gray), CatalogHit::CardPreview(item.id.clone())),
        ];

        let mut cx = x;
        for (label, style, hit) in controls {
            let width = label.chars().count() as u16;
            if cx + width > right {
                break;
            }
            let area = Rect::new(cx, y, width, 1);
            f.render_widget(Paragraph::new(Span::styled(label, style)), area);
            self.hits.push((area, hit));
            cx += width + 1;
        }
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect, state: &CatalogState) {
        self.columns = 1;
        self.page_rows = usize::from(area.height.max(1));
        self.ensure_cursor_visible();

        let controls_width = 30u16.min(area.width / 2);
        for (offset, item) in state.visible().skip(self.scroll).take(self.page_rows).enumerate() {
            let y = area.y + offset as u16;
            let row = Rect::new(area.x, y, area.width.saturating_sub(1), 1);
            let highlighted = self.scroll + offset == self.cursor && self.focus == Focus::Results;
            let base = if highlighted {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            self.hits.push((row, CatalogHit::Card(item.id.clone())));

            let text_width = row.width.saturating_sub(controls_width) as usize;
            let title = truncate(&format!("{} — {}", item.title, item.author), text_width / 2);
            let mut spans = vec![
                Span::styled(if highlighted { "▶ " } else { "  " }, base.fg(Color::Yellow)),
                Span::styled(format!("{title:<width$}", width = text_width / 2), base.fg(Color::White)),
                Span::raw(" "),
            ];
            spans.extend(create_price_spans(item));
            spans.push(Span::raw(" "));
            let (full, half, empty) = item.star_counts();
            spans.push(Span::styled(self.icons.stars(full, half, empty), Style::default().fg(Color::Yellow)));
            f.render_widget(Paragraph::new(Line::from(spans)).style(base), row);

            let controls_x = row.right().saturating_sub(controls_width);
            self.render_item_controls(f, controls_x, y, row.right(), item, state);
        }

        self.render_scrollbar(f, area, state.visible_len());
    }

    fn render_scrollbar(&mut self, f: &mut Frame, area: Rect, total_rows: usize) {
        if total_rows > self.page_rows {
            self.scrollbar_state = self
                .scrollbar_state
                .content_length(total_rows)
                .viewport_content_length(self.page_rows)
                .position(self.scroll);
            f.render_stateful_widget(create_scrollbar(), area, &mut self.scrollbar_state);
        }
    }

    /// Modal with the selected item's details. Drawn over the whole screen.
    pub fn render_detail(&mut self, f: &mut Frame, screen: Rect) {
        self.detail_hits.clear();
        let Some(state) = self.state.take() else {
            return;
        };
        if let Some(item) = state.selected() {
            self.render_detail_modal(f, screen, item, &state);
        }
        self.state = Some(state);
    }

    fn render_detail_modal(&mut self, f: &mut Frame, screen: Rect, item: &Item, state: &CatalogState) {
        self.detail_hits.push((screen, CatalogHit::DetailBackdrop));

        let area = LayoutManager::centered_rect(70, 80, screen);
        f.render_widget(Clear, area);
        let block = create_dialog_block(format!(" {} ", item.title), Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);
        self.detail_hits.push((area, CatalogHit::DetailBody));

        let close = format!("[{}]", self.icons.icons().menu.close);
        let close_width = close.chars().count() as u16;
        if area.width > close_width + 2 {
            let close_area = Rect::new(area.right() - close_width - 1, area.y, close_width, 1);
            f.render_widget(
                Paragraph::new(Span::styled(close, Style::default().fg(Color::Red))),
                close_area,
            );
            self.detail_hits.push((close_area, CatalogHit::DetailClose));
        }

        if inner.height < 4 {
            return;
        }

        let width = inner.width as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                item.title.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("by {}", item.author), Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(create_rating_spans(item, &self.icons)),
            Line::from(create_price_spans(item)),
            Line::from(create_item_badges(item, &self.icons)),
            Line::from(""),
        ];
        lines.extend(wrap(&item.description, width).into_iter().map(Line::from));
        lines.push(Line::from(""));
        for (label, value) in [
            ("Format", item.format.label().to_string()),
            ("Pages", item.pages.to_string()),
            ("Published", item.published.format("%B %-d, %Y").to_string()),
            ("Category", item.category.label().to_string()),
            ("Tags", item.tags.join(", ")),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::styled(value, Style::default().fg(Color::Gray)),
            ]));
        }

        let text_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
        f.render_widget(Paragraph::new(lines), text_area);

        let actions_y = inner.bottom() - 1;
        let in_cart = state.in_cart(&item.id);
        let wished = state.in_wishlist(&item.id);
        let cart_label = format!(
            "[{} {}]",
            self.icons.cart(in_cart),
            if in_cart { "Remove from Cart" } else { "Add to Cart" }
        );
        let wish_label = format!(
            "[{} {}]",
            self.icons.wishlist(wished),
            if wished { "Wishlisted" } else { "Add to Wishlist" }
        );

        let cart_width = cart_label.chars().count() as u16;
        let wish_width = wish_label.chars().count() as u16;
        let cart_area = Rect::new(inner.x, actions_y, cart_width.min(inner.width), 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                cart_label,
                Style::default().fg(Color::Black).bg(if in_cart { Color::Green } else { Color::Yellow }),
            )),
            cart_area,
        );
        self.detail_hits.push((cart_area, CatalogHit::DetailCart(item.id.clone())));

        if cart_width + 1 + wish_width <= inner.width {
            let wish_area = Rect::new(inner.x + cart_width + 1, actions_y, wish_width, 1);
            f.render_widget(
                Paragraph::new(Span::styled(
                    wish_label,
                    Style::default().fg(if wished { Color::Magenta } else { Color::White }),
                )),
                wish_area,
            );
            self.detail_hits.push((wish_area, CatalogHit::DetailWishlist(item.id.clone())));

            let used = cart_width + wish_width + 2;
            if used < inner.width {
                let help = create_instructions_paragraph(&[
                    shortcuts::CART,
                    shortcuts::SEPARATOR,
                    shortcuts::WISHLIST,
                    shortcuts::SEPARATOR,
                    shortcuts::NEXT_PREV,
                    shortcuts::SEPARATOR,
                    shortcuts::ESC_CLOSE,
                ])
                .alignment(Alignment::Right);
                f.render_widget(help, Rect::new(inner.x + used, actions_y, inner.width - used, 1));
            }
        }
    }
}

impl Component for CatalogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.state.is_none() {
            return Action::None;
        }
        if self.detail_open() {
            return self.handle_detail_key(key);
        }
        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Filters => {
                match key.code {
                    KeyCode::Esc | KeyCode::Tab => {
                        self.focus = Focus::Results;
                        return Action::None;
                    }
                    KeyCode::Char('f') => {
                        self.toggle_filters();
                        return Action::None;
                    }
                    _ => {}
                }
                let filter = self.state.as_ref().map(|s| s.filter().clone()).unwrap_or_default();
                match self.filter_panel.handle_key(key, &filter) {
                    Some(action) => action,
                    None => self.handle_results_key(key),
                }
            }
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.state.is_none() {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hits = if self.detail_open() { &self.detail_hits } else { &self.hits };
                match Self::hit_test(hits, mouse.column, mouse.row) {
                    Some((area, hit)) => self.handle_hit(hit, area, mouse.column),
                    None => {
                        if self.focus == Focus::Search {
                            self.focus = Focus::Results;
                        }
                        Action::None
                    }
                }
            }
            MouseEventKind::ScrollDown if !self.detail_open() => {
                self.move_cursor(self.step() as isize);
                Action::None
            }
            MouseEventKind::ScrollUp if !self.detail_open() => {
                self.move_cursor(-(self.step() as isize));
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Catalog(event) => {
                let Some(state) = self.state.as_mut() else {
                    return Action::None;
                };
                let resets_cursor = matches!(
                    event,
                    CatalogEvent::SetQuery(_)
                        | CatalogEvent::SetCategory(_)
                        | CatalogEvent::SetFormat(_)
                        | CatalogEvent::SetMaxPrice(_)
                        | CatalogEvent::SetSort(_)
                        | CatalogEvent::ResetFilters
                );
                let effects = state.apply(event);
                if resets_cursor {
                    self.cursor = 0;
                    self.scroll = 0;
                }
                if let Some(position) = state.selected().and_then(|item| state.visible_position(&item.id)) {
                    self.cursor = position;
                }
                self.clamp_cursor();
                match effects.into_iter().next() {
                    Some(CatalogEffect::CartChanged(count)) => Action::CartUpdated(count),
                    None => Action::None,
                }
            }
            Action::NavigateHome => {
                if let Some(state) = self.state.as_mut() {
                    state.apply(CatalogEvent::ResetFilters);
                }
                self.focus = Focus::Results;
                self.cursor = 0;
                self.scroll = 0;
                Action::NavigateHome
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.hits.clear();
        let [header, body] = LayoutManager::storefront_layout(rect);
        self.render_header(f, header);

        if self.state.is_none() {
            let loading = Paragraph::new(Span::styled(LOADING_CATALOG, Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Center);
            let y = body.y + body.height / 2;
            f.render_widget(loading, Rect::new(body.x, y, body.width, 1).intersection(body));
            return;
        }

        let (panel, results) = LayoutManager::body_layout(body, self.show_filters);
        if let (Some(panel), Some(state)) = (panel, self.state.as_ref()) {
            let filter = state.filter().clone();
            let rows = self.filter_panel.render(f, panel, &filter, self.focus == Focus::Filters);
            self.hits
                .extend(rows.into_iter().map(|(area, row)| (area, CatalogHit::Filter(row))));
        }
        self.render_results(f, results);
    }
}
