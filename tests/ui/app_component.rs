use super::{ctrl, draw, find, key, left_click, screen_text};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use writerdesk::catalog::{SampleCatalog, SortKey, ViewMode};
use writerdesk::config::Config;
use writerdesk::constants::{INFO_NEW_DOCUMENT, INFO_SIGNED_OUT};
use writerdesk::icons::IconTheme;
use writerdesk::logger::Logger;
use writerdesk::menu::{connection_status, ConnectionStatus};
use writerdesk::ui::core::{Action, Component, DialogType, EventType};
use writerdesk::ui::AppComponent;

/// Defaults with a browser that can never launch
fn offline_config() -> Config {
    let mut config = Config::default();
    config.links.browser_command = "/nonexistent/writerdesk-browser".to_string();
    config
}

fn app_with(config: Config) -> AppComponent {
    let mut app = AppComponent::new(config, Logger::new());
    app.process_action(Action::CatalogLoaded(SampleCatalog::items().unwrap()));
    app
}

fn app() -> AppComponent {
    app_with(offline_config())
}

fn send(app: &mut AppComponent, event: KeyEvent) {
    app.handle_event(EventType::Key(event));
}

fn press(app: &mut AppComponent, codes: &[KeyCode]) {
    for code in codes {
        send(app, key(*code));
    }
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        send(app, key(KeyCode::Char(c)));
    }
}

fn render(app: &mut AppComponent, width: u16, height: u16) -> Buffer {
    draw(width, height, |f, area| app.render(f, area))
}

fn click_text(app: &mut AppComponent, buffer: &Buffer, needle: &str) {
    let (x, y) = find(buffer, needle).unwrap_or_else(|| panic!("'{}' not on screen", needle));
    app.handle_event(EventType::Mouse(left_click(x, y)));
}

fn dialog(app: &AppComponent) -> Option<DialogType> {
    app.dialog().dialog_type.clone()
}

fn logged(app: &AppComponent, message: &str) -> bool {
    app.logger().get_logs().iter().any(|line| line.ends_with(message))
}

#[test]
fn test_loading_screen_before_catalog_arrives() {
    let mut app = AppComponent::new(offline_config(), Logger::new());
    let text = screen_text(&render(&mut app, 120, 40));
    assert!(text.contains("Loading catalog..."));
    assert!(text.contains("Not Connected"));

    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());
}

#[test]
fn test_loaded_storefront_layout() {
    let mut app = app();
    let buffer = render(&mut app, 120, 40);
    let text = screen_text(&buffer);

    assert!(text.contains("Bitcoin Books (6 results)"));
    assert!(text.contains("The Bitcoin Standard"));
    assert!(find(&buffer, "Bitcoin Writer").is_some_and(|(_, y)| y == 0));
    assert!(find(&buffer, "F10: menu").is_some_and(|(_, y)| y == 39));
}

#[test]
fn test_config_shapes_initial_catalog() {
    let mut config = offline_config();
    config.catalog.default_sort = SortKey::PriceLow;
    config.catalog.initial_max_price = 30;
    config.ui.default_view = ViewMode::List;
    let app = app_with(config);

    let state = app.catalog().state().unwrap();
    assert_eq!(state.filter().sort, SortKey::PriceLow);
    assert_eq!(state.view_mode(), ViewMode::List);
    assert_eq!(state.visible_len(), 4);
}

#[test]
fn test_catalog_load_failure_is_fatal() {
    let mut app = AppComponent::new(offline_config(), Logger::new());
    app.process_action(Action::CatalogLoadFailed("catalog.json: no such file".to_string()));
    assert!(app.should_quit());
    assert_eq!(app.fatal_error(), Some("catalog.json: no such file"));
}

#[test]
fn test_background_actions_are_drained() {
    let mut app = AppComponent::new(offline_config(), Logger::new());
    app.action_sender()
        .send(Action::CatalogLoaded(SampleCatalog::items().unwrap()))
        .unwrap();
    assert!(!app.catalog().is_loaded());
    app.process_background_actions();
    assert!(app.catalog().is_loaded());
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());

    let mut app = self::app();
    send(&mut app, ctrl('c'));
    assert!(app.should_quit());
    assert_eq!(app.status().cart_count, 0);
}

#[test]
fn test_typing_q_in_search_does_not_quit() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('/')]);
    type_text(&mut app, "quantum");
    assert!(!app.should_quit());
    assert_eq!(app.catalog().state().unwrap().filter().query, "quantum");
}

#[test]
fn test_cart_and_wishlist_counts_reach_status() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('w')]);
    assert_eq!(app.status().cart_count, 1);
    assert_eq!(app.status().wishlist_count, 1);

    let text = screen_text(&render(&mut app, 120, 40));
    assert!(text.contains("Remove from Cart"));
}

#[test]
fn test_new_document_from_file_menu() {
    let mut app = app();
    press(&mut app, &[KeyCode::F(10), KeyCode::Right, KeyCode::Enter]);
    assert_eq!(dialog(&app), Some(DialogType::Info(INFO_NEW_DOCUMENT.to_string())));
    assert!(!app.menu_bar().is_open());

    // Any key dismisses the info dialog
    press(&mut app, &[KeyCode::Char('x')]);
    assert!(dialog(&app).is_none());
}

#[test]
fn test_platform_command_from_edit_menu() {
    let mut app = app();
    press(&mut app, &[KeyCode::F(10), KeyCode::Right, KeyCode::Right, KeyCode::Enter]);
    assert_eq!(app.status().message.as_deref(), Some("Sent Undo to the editor"));
}

#[test]
fn test_ai_assistant_toggle() {
    let mut app = app();
    let open_tools = [KeyCode::F(10), KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Right];

    press(&mut app, &open_tools);
    assert_eq!(app.menu_bar().state().open_menu.as_deref(), Some("Tools"));
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.status().ai_assistant);
    assert_eq!(app.status().message.as_deref(), Some("AI Assistant on"));

    press(&mut app, &open_tools);
    press(&mut app, &[KeyCode::Enter]);
    assert!(!app.status().ai_assistant);
}

#[test]
fn test_unbound_command_is_inert() {
    let mut app = app();
    press(&mut app, &[KeyCode::F(10), KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Right]);
    press(&mut app, &[KeyCode::Down]);
    assert_eq!(app.menu_bar().state().highlighted, Some(2));
    press(&mut app, &[KeyCode::Enter]);

    assert!(logged(&app, "Menu: command has no handler"));
    assert!(dialog(&app).is_none());
    assert!(!app.menu_bar().is_open());
}

#[test]
fn test_sign_in_and_out() {
    let mut config = offline_config();
    config.session.handle = Some("satoshi".to_string());
    let mut app = app_with(config);

    // Sign In is the last entry of the first menu
    press(&mut app, &[KeyCode::F(10), KeyCode::Up, KeyCode::Enter]);
    assert_eq!(
        connection_status(app.menu_bar().session()),
        ConnectionStatus::ConnectedAs("satoshi".to_string())
    );
    let text = screen_text(&render(&mut app, 120, 40));
    assert!(text.contains("$satoshi"));

    press(&mut app, &[KeyCode::F(10), KeyCode::Up, KeyCode::Enter]);
    assert!(!app.menu_bar().session().authenticated);
    assert_eq!(dialog(&app), Some(DialogType::Info(INFO_SIGNED_OUT.to_string())));
}

#[test]
fn test_home_entry_resets_filters() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('/')]);
    type_text(&mut app, "python");
    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.catalog().state().unwrap().visible_len(), 1);

    press(&mut app, &[KeyCode::F(10), KeyCode::Enter]);
    assert!(app.catalog().state().unwrap().filter().is_unfiltered());
    assert_eq!(app.catalog().state().unwrap().visible_len(), 6);
    assert!(!app.menu_bar().is_open());
}

#[test]
fn test_escape_closes_menu() {
    let mut app = app();
    press(&mut app, &[KeyCode::F(10)]);
    assert!(app.menu_bar().is_open());
    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.menu_bar().is_open());
}

#[test]
fn test_external_link_failure_shows_error() {
    let mut app = app();
    let issues_url = offline_config().links.issues_url;

    // Help is the last menu; its link follows a divider
    press(&mut app, &[KeyCode::F(10), KeyCode::Left, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(
        dialog(&app),
        Some(DialogType::Error(format!("Could not open {}", issues_url)))
    );
}

#[test]
fn test_app_switcher_keys() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('b'), KeyCode::Enter]);
    assert_eq!(
        dialog(&app),
        Some(DialogType::Error("Could not open https://www.bitcoinapps.store/".to_string()))
    );
    assert!(!app.menu_bar().state().app_switcher_open);

    // "Bitcoin Auth" is not live yet
    let mut app = self::app();
    press(&mut app, &[KeyCode::Char('b'), KeyCode::Down, KeyCode::Enter]);
    assert!(app.menu_bar().state().app_switcher_open);
    assert!(dialog(&app).is_none());
}

#[test]
fn test_help_logs_and_icon_keys() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('?')]);
    assert_eq!(dialog(&app), Some(DialogType::Help));
    press(&mut app, &[KeyCode::Char('q')]);
    assert!(!app.should_quit());
    press(&mut app, &[KeyCode::Char('?')]);
    assert!(dialog(&app).is_none());

    press(&mut app, &[KeyCode::Char('G')]);
    assert_eq!(dialog(&app), Some(DialogType::Logs));
    press(&mut app, &[KeyCode::Esc]);

    press(&mut app, &[KeyCode::Char('i')]);
    assert_eq!(app.catalog().icons.theme(), IconTheme::Emoji);
    assert_eq!(app.menu_bar().icons.theme(), IconTheme::Emoji);
}

#[test]
fn test_detail_keys_take_priority() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.catalog().detail_open());

    // 'q' is not a detail key and must not quit behind the modal
    press(&mut app, &[KeyCode::Char('q'), KeyCode::Char('c')]);
    assert!(!app.should_quit());
    assert_eq!(app.status().cart_count, 1);

    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.catalog().detail_open());
}

#[test]
fn test_escape_closes_menu_over_detail() {
    let mut app = app();
    press(&mut app, &[KeyCode::Enter]);
    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "File");
    assert_eq!(app.menu_bar().state().open_menu.as_deref(), Some("File"));
    assert!(app.catalog().detail_open());

    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.menu_bar().is_open());
    assert!(app.catalog().detail_open());

    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.catalog().detail_open());
}

#[test]
fn test_click_menu_label_opens_dropdown() {
    let mut app = app();
    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "File");
    assert_eq!(app.menu_bar().state().open_menu.as_deref(), Some("File"));

    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "New Document");
    assert_eq!(dialog(&app), Some(DialogType::Info(INFO_NEW_DOCUMENT.to_string())));
}

#[test]
fn test_outside_click_dismisses_and_passes_through() {
    let mut app = app();
    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "File");

    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "List");
    assert!(!app.menu_bar().is_open());
    assert_eq!(app.catalog().state().unwrap().view_mode(), ViewMode::List);
}

#[test]
fn test_card_click_opens_detail_and_backdrop_closes() {
    let mut app = app();
    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "Mastering Bitcoin");
    assert!(app.catalog().detail_open());

    let text = screen_text(&render(&mut app, 120, 40));
    assert!(text.contains("Published: July 15, 2017"));

    app.handle_event(EventType::Mouse(left_click(1, 5)));
    assert!(!app.catalog().detail_open());
}

#[test]
fn test_card_cart_control_click() {
    let mut app = app();
    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "Add to Cart");
    assert_eq!(app.status().cart_count, 1);
    assert!(!app.catalog().detail_open());
}

#[test]
fn test_compact_layout_hamburger() {
    let mut app = app();
    let buffer = render(&mut app, 60, 30);
    assert!(app.menu_bar().is_compact());

    click_text(&mut app, &buffer, "☰");
    assert!(app.menu_bar().state().mobile_open);

    let text = screen_text(&render(&mut app, 60, 30));
    assert!(text.contains("New Document"));
}

#[test]
fn test_mouse_can_be_disabled() {
    let mut config = offline_config();
    config.ui.mouse_enabled = false;
    let mut app = app_with(config);

    let buffer = render(&mut app, 120, 40);
    click_text(&mut app, &buffer, "File");
    assert!(!app.menu_bar().is_open());
}

#[test]
fn test_dialog_blocks_mouse() {
    let mut app = app();
    let buffer = render(&mut app, 120, 40);
    press(&mut app, &[KeyCode::Char('?')]);
    click_text(&mut app, &buffer, "File");
    assert!(!app.menu_bar().is_open());
    assert_eq!(dialog(&app), Some(DialogType::Help));
}
