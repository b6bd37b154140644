use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::common::create_scrollbar;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
BITCOIN WRITER - Bookstore & Menu Bar
=====================================

BROWSING
--------
←↑↓→ / hjkl Move between books
Enter       Open book details
c           Add to / remove from cart
w           Toggle wishlist
o           Open preview (when available)
PageUp/Down Scroll a page of results

SEARCH & FILTERS
----------------
/           Focus the search box (Esc or Enter to leave)
f           Show filters panel and focus it
s           Cycle sort order
v           Switch grid / list view
r           Reset search and filters

BOOK DETAILS
------------
n/p         Next / previous book
c / w       Cart / wishlist
Esc / x     Close

MENU BAR
--------
F10         Open the first menu
←/→         Switch menus while one is open
↑/↓         Move the highlight
Enter       Activate highlighted entry
b           Toggle the Bitcoin Apps switcher
m           Toggle the compact menu
Esc         Close menus and overlays
Mouse       Click menus, hover to switch, click outside to close
Logo        Double-click the ₿ logo to go home

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show logs
i           Change icon theme
q / Ctrl+C  Quit application

Press 'Esc' or '?' to close this help panel
";

/// Info or error message box
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    is_error: bool,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let (percent_x, height, color, title) = if is_error {
        (70, 12, Color::Red, format!("{} Error", icons.error()))
    } else {
        (60, 10, Color::Blue, format!("{} Info", icons.info()))
    };
    let dialog_area = LayoutManager::centered_rect_lines(percent_x, height, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    f.render_widget(block, dialog_area);
    render_scrollable_text(f, content_area, message, None, scroll_offset, scrollbar_state);

    let instructions = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(instructions, instructions_area);
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let help_area = inset(LayoutManager::centered_rect(90, 90, area));
    f.render_widget(Clear, help_area);
    render_scrollable_text(
        f,
        help_area,
        HELP_CONTENT,
        Some("📖 Help - Press 'Esc' or '?' to close"),
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs_area = inset(LayoutManager::centered_rect(90, 90, area));
    f.render_widget(Clear, logs_area);

    let logs = logger.get_logs();
    let logs_content = if logs.is_empty() {
        "No debug logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_scrollable_text(
        f,
        logs_area,
        &logs_content,
        Some(DIALOG_TITLE_DEBUG_LOGS),
        scroll_offset,
        scrollbar_state,
    );
}

fn inset(area: Rect) -> Rect {
    let margin_x = 2;
    let margin_y = 1;
    Rect::new(
        area.x + margin_x,
        area.y + margin_y,
        area.width.saturating_sub(margin_x * 2),
        area.height.saturating_sub(margin_y * 2),
    )
}

/// Draw the visible window of `text`, with a scrollbar when it overflows.
/// A title puts the text in a bordered block.
fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    text: &str,
    title: Option<&str>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines: Vec<&str> = text.lines().collect();
    let total_lines = lines.len();
    let border_rows = if title.is_some() { 2 } else { 0 };
    let visible_height = area.height.saturating_sub(border_rows) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let mut paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    match title {
        Some(title) => {
            paragraph = paragraph.block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
        }
        None => paragraph = paragraph.wrap(Wrap { trim: true }),
    }

    f.render_widget(paragraph, area);

    if total_lines > visible_height {
        f.render_stateful_widget(create_scrollbar(), area, scrollbar_state);
    }
}
