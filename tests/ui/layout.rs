use ratatui::layout::Rect;
use writerdesk::ui::LayoutManager;

#[test]
fn test_main_layout_reserves_bar_and_status_rows() {
    let [bar, content, status] = LayoutManager::main_layout(Rect::new(0, 0, 100, 30));
    assert_eq!(bar, Rect::new(0, 0, 100, 1));
    assert_eq!(content, Rect::new(0, 1, 100, 28));
    assert_eq!(status, Rect::new(0, 29, 100, 1));
}

#[test]
fn test_main_layout_on_tiny_terminal() {
    let [bar, content, status] = LayoutManager::main_layout(Rect::new(0, 0, 20, 1));
    assert_eq!(bar.height, 1);
    assert_eq!(content.height, 0);
    assert_eq!(status.height, 0);
}

#[test]
fn test_grid_geometry() {
    assert_eq!(LayoutManager::grid_columns(120), 3);
    assert_eq!(LayoutManager::grid_columns(10), 1);
    assert_eq!(LayoutManager::grid_rows(3), 1);

    let area = Rect::new(0, 4, 90, 20);
    let card = LayoutManager::card_rect(area, 3, 1, 2);
    assert_eq!((card.x, card.y, card.width), (60, 12, 30));
    assert!(area.contains(card.as_position()));
}

#[test]
fn test_body_layout_with_and_without_filters() {
    let area = Rect::new(0, 0, 100, 20);
    assert_eq!(LayoutManager::body_layout(area, false), (None, area));

    let (panel, results) = LayoutManager::body_layout(area, true);
    let panel = panel.unwrap();
    assert_eq!(panel.width, 30);
    assert_eq!(results.x, 30);
    assert_eq!(results.width, 70);
}

#[test]
fn test_dropdown_stays_on_screen() {
    let screen = Rect::new(0, 0, 120, 40);
    let dropdown = LayoutManager::dropdown_rect(110, 1, 30, 10, screen);
    assert_eq!(dropdown, Rect::new(90, 1, 30, 10));

    let tall = LayoutManager::dropdown_rect(0, 35, 20, 10, screen);
    assert_eq!(tall.bottom(), 40);
}

#[test]
fn test_centered_rect_is_inside() {
    let area = Rect::new(0, 0, 100, 50);
    let popup = LayoutManager::centered_rect(60, 40, area);
    assert_eq!(popup.width, 60);
    assert_eq!(popup.height, 20);
    assert_eq!(popup.x, 20);
    assert!(LayoutManager::contains(popup, 50, 25));
    assert!(!LayoutManager::contains(popup, 0, 0));
}
