use super::ISSUES_URL;
use writerdesk::constants::APP_NAME;
use writerdesk::menu::{default_apps, CommandId, Menu, MenuAction, MenuEntry, MenuTable};

#[test]
fn test_standard_menu_order() {
    let table = MenuTable::standard(false, ISSUES_URL);
    assert_eq!(
        table.labels(),
        vec![APP_NAME, "File", "Edit", "Format", "Tools", "View", "Window", "Help"]
    );
    assert_eq!(table.position("Tools"), Some(4));
}

#[test]
fn test_session_entry_follows_authentication() {
    let last_label = |authenticated: bool| {
        let table = MenuTable::standard(authenticated, ISSUES_URL);
        let menu = table.get(APP_NAME).unwrap();
        menu.entries.last().and_then(MenuEntry::label).map(str::to_string)
    };
    assert_eq!(last_label(false).as_deref(), Some("Sign In"));
    assert_eq!(last_label(true).as_deref(), Some("Sign Out"));
}

#[test]
fn test_file_menu_layout() {
    let table = MenuTable::standard(false, ISSUES_URL);
    let file = table.get("File").unwrap();
    assert_eq!(file.entries.len(), 10);
    assert_eq!(file.entries.iter().filter(|e| !e.is_interactive()).count(), 3);
    assert_eq!(file.entries[0].label(), Some("New Document"));
    assert_eq!(file.entries[0].shortcut(), Some("⌘N"));
}

#[test]
fn test_tools_ai_assistant_entry() {
    let table = MenuTable::standard(false, ISSUES_URL);
    match &table.get("Tools").unwrap().entries[0] {
        MenuEntry::Action { label, icon, action, .. } => {
            assert_eq!(label, "AI Assistant");
            assert!(icon.is_some());
            assert_eq!(action, &MenuAction::Command(CommandId::ToggleAiAssistant));
        }
        other => panic!("unexpected entry {:?}", other),
    }
}

#[test]
fn test_help_links_to_issue_tracker() {
    let table = MenuTable::standard(false, ISSUES_URL);
    let help = table.get("Help").unwrap();
    assert_eq!(
        help.entries.last(),
        Some(&MenuEntry::Link {
            label: "Report an Issue".to_string(),
            url: ISSUES_URL.to_string(),
        })
    );
}

#[test]
fn test_flatten_preserves_table_order() {
    let table = MenuTable::standard(false, ISSUES_URL);
    let total: usize = table.menus().iter().map(|menu| menu.entries.len()).sum();
    assert_eq!(table.flatten().count(), total);

    let (menu, entry) = table.flatten().last().unwrap();
    assert_eq!(menu, "Help");
    assert_eq!(entry.label(), Some("Report an Issue"));
}

#[test]
fn test_next_interactive() {
    let menu = Menu {
        label: "Test".to_string(),
        entries: vec![
            MenuEntry::Divider,
            MenuEntry::Link {
                label: "Only".to_string(),
                url: "https://example.com".to_string(),
            },
            MenuEntry::Divider,
        ],
    };
    assert_eq!(menu.next_interactive(0, true), Some(1));
    assert_eq!(menu.next_interactive(2, true), Some(1));
    assert_eq!(menu.next_interactive(0, false), Some(1));

    let dividers = Menu {
        label: "Empty".to_string(),
        entries: vec![MenuEntry::Divider],
    };
    assert_eq!(dividers.next_interactive(0, true), None);
}

#[test]
fn test_default_apps() {
    let apps = default_apps();
    assert_eq!(apps.len(), 21);

    assert_eq!(apps[0].name, "Bitcoin Apps Store");
    assert!(apps[0].is_navigable());
    assert_eq!(apps[0].badge(), None);

    assert_eq!(apps[1].name, "Bitcoin Auth");
    assert!(!apps[1].is_navigable());
    assert_eq!(apps[1].badge(), Some("Soon"));

    let current = apps.last().unwrap();
    assert_eq!(current.name, APP_NAME);
    assert!(current.current);
    assert!(!current.is_navigable());
    assert_eq!(current.badge(), Some("Current"));

    for app in apps.iter().filter(|app| app.disabled) {
        assert_eq!(app.url, "#");
    }
    assert_eq!(apps.iter().filter(|app| app.current).count(), 1);
}
