use super::{draw, key, screen_text};
use crossterm::event::KeyCode;
use writerdesk::logger::Logger;
use writerdesk::ui::components::DialogComponent;
use writerdesk::ui::core::{Action, Component, DialogType};

fn showing(dialog_type: DialogType) -> DialogComponent {
    let mut dialog = DialogComponent::new(Logger::new());
    assert!(matches!(dialog.update(Action::ShowDialog(dialog_type)), Action::None));
    dialog
}

#[test]
fn test_info_closes_on_any_non_scroll_key() {
    let mut dialog = showing(DialogType::Info("hello".to_string()));
    assert!(dialog.is_visible());

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Down)), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::HideDialog));

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_help_needs_its_own_close_keys() {
    let mut dialog = showing(DialogType::Help);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}

#[test]
fn test_logs_close_keys() {
    let mut dialog = showing(DialogType::Logs);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::HideDialog));
}

#[test]
fn test_hidden_dialog_ignores_keys_and_passes_actions() {
    let mut dialog = DialogComponent::default();
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
    assert!(matches!(dialog.update(Action::Quit), Action::Quit));
}

#[test]
fn test_render_message_dialogs() {
    let mut info = showing(DialogType::Info("Document saved".to_string()));
    let text = screen_text(&draw(100, 30, |f, area| info.render(f, area)));
    assert!(text.contains("Document saved"));
    assert!(text.contains("Press any key to continue"));

    let mut error = showing(DialogType::Error("Could not open link".to_string()));
    let text = screen_text(&draw(100, 30, |f, area| error.render(f, area)));
    assert!(text.contains("Error"));
    assert!(text.contains("Could not open link"));
}

#[test]
fn test_render_help_and_logs() {
    let mut help = showing(DialogType::Help);
    let text = screen_text(&draw(100, 40, |f, area| help.render(f, area)));
    assert!(text.contains("BITCOIN WRITER"));

    let logger = Logger::new();
    logger.log("Catalog: loaded 6 items".to_string());
    let mut logs = DialogComponent::new(logger);
    logs.update(Action::ShowDialog(DialogType::Logs));
    let text = screen_text(&draw(100, 30, |f, area| logs.render(f, area)));
    assert!(text.contains("Catalog: loaded 6 items"));
}
