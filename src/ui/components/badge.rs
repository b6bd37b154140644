use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::catalog::{format_price, Item};
use crate::icons::IconService;

/// Create badges with parentheses for secondary facts
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(format!("({text})"), Style::default().fg(Color::DarkGray))
}

/// Create a filled badge with the given background
#[must_use]
pub fn create_pill_badge(text: &str, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {text} "),
        Style::default().bg(bg).fg(Color::Black).add_modifier(Modifier::BOLD),
    )
}

/// Bestseller / Featured pills for a card
#[must_use]
pub fn create_item_badges(item: &Item, icons: &IconService) -> Vec<Span<'static>> {
    let set = icons.icons();
    let mut badges = Vec::new();

    if item.bestseller {
        badges.push(create_pill_badge(
            &format!("{} Bestseller", set.item.bestseller),
            Color::Rgb(255, 165, 0),
        ));
    }
    if item.featured {
        if !badges.is_empty() {
            badges.push(Span::raw(" "));
        }
        badges.push(create_pill_badge(&format!("{} Featured", set.item.featured), Color::Cyan));
    }

    badges
}

/// Current price, struck-through original price and discount
#[must_use]
pub fn create_price_spans(item: &Item) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format_price(item.price),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )];

    if let Some(original) = item.original_price {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format_price(original),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    if let Some(percent) = item.discount_percent() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("-{percent}%"), Style::default().fg(Color::Red)));
    }

    spans
}

/// Stars followed by "4.8 (342 reviews)"
#[must_use]
pub fn create_rating_spans(item: &Item, icons: &IconService) -> Vec<Span<'static>> {
    let (full, half, empty) = item.star_counts();
    vec![
        Span::styled(icons.stars(full, half, empty), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled(
            format!("{} ({} reviews)", item.rating, item.review_count),
            Style::default().fg(Color::Gray),
        ),
    ]
}

/// "Current" / "Soon" marker in the app switcher
#[must_use]
pub fn create_app_badge(text: &'static str) -> Span<'static> {
    let color = if text == "Current" { Color::Green } else { Color::DarkGray };
    Span::styled(format!("[{text}]"), Style::default().fg(color))
}
