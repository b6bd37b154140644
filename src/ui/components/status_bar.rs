//! Status bar component

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_SHORTCUTS;
use crate::icons::IconService;

/// What the status bar shows. Owned by the app component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub cart_count: usize,
    pub wishlist_count: usize,
    pub ai_assistant: bool,
    /// Last transient message (platform command, navigation, ...)
    pub message: Option<String>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: &StatusInfo, icons: &IconService) {
        let cart = icons.cart(status.cart_count > 0);
        let wishlist = icons.wishlist(status.wishlist_count > 0);
        let mut counters = vec![
            Span::styled(
                format!(" {cart} {} ", status.cart_count),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{wishlist} {} ", status.wishlist_count),
                Style::default().fg(Color::Magenta),
            ),
        ];
        if status.ai_assistant {
            counters.push(Span::styled(" AI ", Style::default().fg(Color::Black).bg(Color::Cyan)));
        }
        let counters = Line::from(counters);
        let counters_width = counters.width() as u16;

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(counters_width.min(area.width)), Constraint::Min(0)])
            .split(area);

        f.render_widget(Paragraph::new(counters), chunks[0]);

        let (text, color) = match &status.message {
            Some(message) => (message.as_str(), Color::Yellow),
            None => (STATUS_SHORTCUTS, Color::Gray),
        };
        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, chunks[1]);
    }
}
