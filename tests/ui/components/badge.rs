use writerdesk::catalog::SampleCatalog;
use writerdesk::icons::{IconService, IconTheme};
use writerdesk::ui::components::badge::{
    create_app_badge, create_item_badges, create_paren_badge, create_price_spans, create_rating_spans,
};

fn text(spans: &[ratatui::text::Span<'_>]) -> String {
    spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn test_price_spans_show_discount() {
    let items = SampleCatalog::items().unwrap();
    assert_eq!(text(&create_price_spans(&items[0])), "$24.99 $29.99 -17%");
    assert_eq!(text(&create_price_spans(&items[1])), "$39.99");
}

#[test]
fn test_item_badges() {
    let items = SampleCatalog::items().unwrap();
    let icons = IconService::new(IconTheme::Ascii);

    let both = text(&create_item_badges(&items[0], &icons));
    assert!(both.contains("Bestseller"));
    assert!(both.contains("Featured"));

    assert!(create_item_badges(&items[2], &icons).is_empty());
}

#[test]
fn test_rating_spans() {
    let items = SampleCatalog::items().unwrap();
    let icons = IconService::new(IconTheme::Ascii);
    assert_eq!(text(&create_rating_spans(&items[0], &icons)), "****+ 4.5 (1247 reviews)");
}

#[test]
fn test_small_badges() {
    assert_eq!(create_paren_badge("3").content, "(3)");
    assert_eq!(create_app_badge("Current").content, "[Current]");
    assert_eq!(create_app_badge("Soon").content, "[Soon]");
}
