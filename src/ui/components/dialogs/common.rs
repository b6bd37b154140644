use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: impl Into<Line<'a>>, theme_color: Color) -> Block<'a> {
    let title: Line<'a> = title.into();
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor when focused
pub fn create_input_paragraph<'a>(input_buffer: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let content = if input_buffer.is_empty() && !focused {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else if focused {
        Line::from(vec![Span::raw(input_buffer), Span::raw("█")])
    } else {
        Line::from(input_buffer)
    };

    let border_color = if focused { Color::Yellow } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border_color));

    Paragraph::new(content)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Vertical scrollbar styled like every other scrollable area
pub fn create_scrollbar() -> Scrollbar<'static> {
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White))
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const CART: InstructionShortcut = ("c", Color::Green, " Cart");
    pub const WISHLIST: InstructionShortcut = ("w", Color::Magenta, " Wishlist");
    pub const NEXT_PREV: InstructionShortcut = ("n/p", Color::Cyan, " Next/Previous");
    pub const CHANGE: InstructionShortcut = ("←/→", Color::Cyan, " Change");
    pub const ROW: InstructionShortcut = ("↑/↓", Color::Cyan, " Field");
}
