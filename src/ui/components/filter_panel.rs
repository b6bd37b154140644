//! Category / format / price filters shown beside the results.

use crate::catalog::{CatalogEvent, Category, FilterState, Format};
use crate::constants::{PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_PAGE, PRICE_SLIDER_STEP};
use crate::ui::components::dialogs::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterRow {
    #[default]
    Category,
    Format,
    Price,
}

impl FilterRow {
    const ALL: [FilterRow; 3] = [FilterRow::Category, FilterRow::Format, FilterRow::Price];

    fn shift(self, forward: bool) -> FilterRow {
        let index = FilterRow::ALL.iter().position(|r| *r == self).unwrap_or(0);
        let len = FilterRow::ALL.len();
        let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
        FilterRow::ALL[next]
    }
}

/// Cycle through `None` ("all") followed by every option
fn cycle_option<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let mut choices: Vec<Option<T>> = vec![None];
    choices.extend(options.iter().copied().map(Some));
    let index = choices.iter().position(|c| *c == current).unwrap_or(0);
    let len = choices.len();
    let next = if forward { (index + 1) % len } else { (index + len - 1) % len };
    choices[next]
}

/// Slider value after moving `delta` dollars, clamped to the slider range
#[must_use]
pub fn slide_price(current_max: f64, delta: i32) -> f64 {
    let current = current_max.round() as i32;
    f64::from((current + delta).clamp(i32::from(PRICE_SLIDER_MIN), i32::from(PRICE_SLIDER_MAX)))
}

/// Slider value for a click at `column` on a track drawn in `track`
#[must_use]
pub fn price_at_column(track: Rect, column: u16) -> f64 {
    let span = track.width.saturating_sub(1).max(1);
    let offset = column.saturating_sub(track.x).min(span);
    let range = f64::from(PRICE_SLIDER_MAX - PRICE_SLIDER_MIN);
    (f64::from(PRICE_SLIDER_MIN) + range * f64::from(offset) / f64::from(span)).round()
}

#[derive(Debug, Default)]
pub struct FilterPanel {
    pub row: FilterRow,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys while the panel has focus. `None` means the key is not ours.
    pub fn handle_key(&mut self, key: KeyEvent, filter: &FilterState) -> Option<Action> {
        let step = i32::from(PRICE_SLIDER_STEP);
        let page = i32::from(PRICE_SLIDER_PAGE);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.row = self.row.shift(false);
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.row = self.row.shift(true);
                Some(Action::None)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(self.adjust(filter, false, step)),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Enter => {
                Some(self.adjust(filter, true, step))
            }
            KeyCode::PageDown if self.row == FilterRow::Price => Some(self.adjust(filter, false, page)),
            KeyCode::PageUp if self.row == FilterRow::Price => Some(self.adjust(filter, true, page)),
            _ => None,
        }
    }

    fn adjust(&self, filter: &FilterState, forward: bool, price_step: i32) -> Action {
        let event = match self.row {
            FilterRow::Category => CatalogEvent::SetCategory(cycle_option(filter.category, &Category::ALL, forward)),
            FilterRow::Format => CatalogEvent::SetFormat(cycle_option(filter.format, &Format::ALL, forward)),
            FilterRow::Price => {
                let delta = if forward { price_step } else { -price_step };
                CatalogEvent::SetMaxPrice(slide_price(filter.price.max(), delta))
            }
        };
        Action::Catalog(event)
    }

    /// Mouse click on a row recorded by [`FilterPanel::render`]
    pub fn click(&mut self, row: FilterRow, area: Rect, column: u16, filter: &FilterState) -> Action {
        self.row = row;
        match row {
            FilterRow::Price => Action::Catalog(CatalogEvent::SetMaxPrice(price_at_column(area, column))),
            _ => self.adjust(filter, true, 0),
        }
    }

    /// Draw the panel and return the clickable row areas
    pub fn render(&self, f: &mut Frame, area: Rect, filter: &FilterState, focused: bool) -> Vec<(Rect, FilterRow)> {
        let border = if focused { Color::Yellow } else { Color::Gray };
        let block = create_dialog_block(" Filters ", border);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut hits = Vec::new();
        if inner.height < 2 || inner.width < 4 {
            return hits;
        }

        let category = filter.category.map_or("All Categories", Category::label);
        let format = filter.format.map_or("All Formats", Format::label);

        let mut y = inner.y;
        for (row, title, value) in [
            (FilterRow::Category, "Category", category),
            (FilterRow::Format, "Format", format),
        ] {
            if y + 1 >= inner.bottom() {
                break;
            }
            let selected = focused && self.row == row;
            let marker = if selected { "▶ " } else { "  " };
            let title_line = Line::from(Span::styled(
                format!("{marker}{title}"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            let value_style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let value_line = Line::from(Span::styled(format!("  ‹ {value} ›"), value_style));
            let rect = Rect::new(inner.x, y, inner.width, 2);
            f.render_widget(Paragraph::new(vec![title_line, value_line]), rect);
            hits.push((rect, row));
            y += 3;
        }

        if y + 2 < inner.bottom() {
            let selected = focused && self.row == FilterRow::Price;
            let marker = if selected { "▶ " } else { "  " };
            let title = Line::from(Span::styled(
                format!("{marker}Price Range"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            f.render_widget(Paragraph::new(title), Rect::new(inner.x, y, inner.width, 1));

            let track = Rect::new(inner.x + 2, y + 1, inner.width.saturating_sub(2), 1);
            let ratio = (filter.price.max() / f64::from(PRICE_SLIDER_MAX)).clamp(0.0, 1.0);
            let gauge_color = if selected { Color::Yellow } else { Color::Green };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(gauge_color).bg(Color::DarkGray))
                .ratio(ratio)
                .label(format!("${} - ${}", filter.price.min(), filter.price.max()));
            f.render_widget(gauge, track);
            hits.push((track, FilterRow::Price));
            y += 3;
        }

        if focused && y < inner.bottom() {
            let help = create_instructions_paragraph(&[shortcuts::ROW, shortcuts::SEPARATOR, shortcuts::CHANGE]);
            f.render_widget(help, Rect::new(inner.x, inner.bottom() - 1, inner.width, 1));
        }

        hits
    }
}
