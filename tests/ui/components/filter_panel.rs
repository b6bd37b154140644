use super::{draw, key, screen_text};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use writerdesk::catalog::{CatalogEvent, Category, FilterState, Format};
use writerdesk::ui::components::filter_panel::{price_at_column, slide_price, FilterPanel, FilterRow};
use writerdesk::ui::core::Action;

fn event(action: Option<Action>) -> CatalogEvent {
    match action {
        Some(Action::Catalog(event)) => event,
        other => panic!("expected a catalog event, got {:?}", other),
    }
}

#[test]
fn test_slide_price_clamps_to_slider_range() {
    assert_eq!(slide_price(50.0, 5), 55.0);
    assert_eq!(slide_price(98.0, 10), 100.0);
    assert_eq!(slide_price(3.0, -10), 0.0);
    assert_eq!(slide_price(24.99, 1), 26.0);
}

#[test]
fn test_price_at_column() {
    let track = Rect::new(10, 0, 11, 1);
    assert_eq!(price_at_column(track, 10), 0.0);
    assert_eq!(price_at_column(track, 15), 50.0);
    assert_eq!(price_at_column(track, 20), 100.0);
    assert_eq!(price_at_column(track, 5), 0.0);
    assert_eq!(price_at_column(track, 40), 100.0);
}

#[test]
fn test_category_cycles_through_all() {
    let mut panel = FilterPanel::new();
    let filter = FilterState::default();

    assert_eq!(
        event(panel.handle_key(key(KeyCode::Right), &filter)),
        CatalogEvent::SetCategory(Some(Category::Beginner))
    );
    assert_eq!(
        event(panel.handle_key(key(KeyCode::Left), &filter)),
        CatalogEvent::SetCategory(Some(Category::Security))
    );

    let last = FilterState {
        category: Some(Category::Security),
        ..FilterState::default()
    };
    assert_eq!(
        event(panel.handle_key(key(KeyCode::Right), &last)),
        CatalogEvent::SetCategory(None)
    );
}

#[test]
fn test_rows_and_price_keys() {
    let mut panel = FilterPanel::new();
    let filter = FilterState::default();

    panel.handle_key(key(KeyCode::Down), &filter);
    assert_eq!(panel.row, FilterRow::Format);
    assert_eq!(
        event(panel.handle_key(key(KeyCode::Right), &filter)),
        CatalogEvent::SetFormat(Some(Format::Ebook))
    );

    panel.handle_key(key(KeyCode::Down), &filter);
    assert_eq!(panel.row, FilterRow::Price);
    assert_eq!(
        event(panel.handle_key(key(KeyCode::PageDown), &filter)),
        CatalogEvent::SetMaxPrice(90.0)
    );
    assert_eq!(
        event(panel.handle_key(key(KeyCode::Right), &filter)),
        CatalogEvent::SetMaxPrice(100.0)
    );

    // Wraps back to the first row
    panel.handle_key(key(KeyCode::Down), &filter);
    assert_eq!(panel.row, FilterRow::Category);

    assert!(panel.handle_key(key(KeyCode::Char('x')), &filter).is_none());
    assert!(panel.handle_key(key(KeyCode::PageDown), &filter).is_none());
}

#[test]
fn test_click_on_price_track_sets_maximum() {
    let mut panel = FilterPanel::new();
    let track = Rect::new(0, 0, 101, 1);
    match panel.click(FilterRow::Price, track, 25, &FilterState::default()) {
        Action::Catalog(CatalogEvent::SetMaxPrice(max)) => assert_eq!(max, 25.0),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(panel.row, FilterRow::Price);
}

#[test]
fn test_render_lists_rows() {
    let panel = FilterPanel::new();
    let filter = FilterState::default();
    let mut hits = Vec::new();
    let buffer = draw(30, 16, |f, area| hits = panel.render(f, area, &filter, true));

    let rows: Vec<FilterRow> = hits.iter().map(|(_, row)| *row).collect();
    assert_eq!(rows, vec![FilterRow::Category, FilterRow::Format, FilterRow::Price]);

    let text = screen_text(&buffer);
    assert!(text.contains("All Categories"));
    assert!(text.contains("All Formats"));
    assert!(text.contains("$0 - $100"));
}
