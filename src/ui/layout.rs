//! Layout management and calculations

use crate::constants::{CARD_HEIGHT, CARD_WIDTH, FILTER_PANEL_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into menu bar (1 line), content, and status bar (1 line)
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let bar_height = area.height.min(1);
        let status_height = area.height.saturating_sub(bar_height).min(1);
        let content_height = area.height.saturating_sub(bar_height + status_height);

        [
            Rect::new(area.x, area.y, area.width, bar_height),
            Rect::new(area.x, area.y + bar_height, area.width, content_height),
            Rect::new(area.x, area.y + bar_height + content_height, area.width, status_height),
        ]
    }

    /// Split the storefront into header (search + toolbar) and body
    #[must_use]
    pub fn storefront_layout(area: Rect) -> [Rect; 2] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        [chunks[0], chunks[1]]
    }

    /// Body with an optional filter panel on the left
    #[must_use]
    pub fn body_layout(area: Rect, show_filters: bool) -> (Option<Rect>, Rect) {
        if !show_filters {
            return (None, area);
        }
        let panel_width = FILTER_PANEL_WIDTH.min(area.width / 2);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(panel_width), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    }

    /// Number of card columns that fit in `width`
    #[must_use]
    pub fn grid_columns(width: u16) -> usize {
        usize::from((width / CARD_WIDTH).max(1))
    }

    /// Number of card rows that fit in `height`
    #[must_use]
    pub fn grid_rows(height: u16) -> usize {
        usize::from((height / CARD_HEIGHT).max(1))
    }

    /// Rectangle of the card at (`row`, `column`) of the visible grid page
    #[must_use]
    pub fn card_rect(area: Rect, columns: usize, row: usize, column: usize) -> Rect {
        let columns = columns.max(1) as u16;
        let card_width = (area.width / columns).max(1);
        let x = area.x + card_width * column as u16;
        let y = area.y + CARD_HEIGHT * row as u16;
        Rect::new(x, y, card_width, CARD_HEIGHT).intersection(area)
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Dropdown placed under a menu-bar button, kept on screen
    #[must_use]
    pub fn dropdown_rect(anchor_x: u16, top: u16, width: u16, height: u16, screen: Rect) -> Rect {
        let width = width.min(screen.width);
        let x = anchor_x.min(screen.right().saturating_sub(width));
        Rect::new(x, top, width, height).intersection(screen)
    }

    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}
