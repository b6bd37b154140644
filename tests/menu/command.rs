use super::RecordingNavigator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use writerdesk::menu::{
    launch_browser, perform, CommandDispatcher, CommandId, CommandRegistry, Dispatch, MenuAction, MenuOutcome,
};

fn counting_registry(command: CommandId) -> (CommandRegistry, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = CommandRegistry::new();
    let counter = Arc::clone(&calls);
    registry.register(command, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (registry, calls)
}

#[test]
fn test_registry_dispatch() {
    let (mut registry, calls) = counting_registry(CommandId::SaveDocument);
    assert_eq!(registry.len(), 1);
    assert!(registry.is_bound(CommandId::SaveDocument));

    assert_eq!(registry.dispatch(CommandId::SaveDocument), Dispatch::Handled);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(registry.dispatch(CommandId::ExportPdf), Dispatch::Unbound);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unregister_makes_command_inert() {
    let (mut registry, calls) = counting_registry(CommandId::About);
    assert!(registry.unregister(CommandId::About));
    assert!(!registry.unregister(CommandId::About));
    assert!(registry.is_empty());
    assert_eq!(registry.dispatch(CommandId::About), Dispatch::Unbound);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_platform_commands() {
    assert!(CommandId::Undo.is_platform_command());
    assert!(CommandId::Bold.is_platform_command());
    assert!(CommandId::ZoomIn.is_platform_command());
    assert!(!CommandId::SaveDocument.is_platform_command());
    assert!(!CommandId::Zoom.is_platform_command());
    assert_eq!(CommandId::SaveDocumentAs.to_string(), "SaveDocumentAs");
}

#[test]
fn test_perform_routes_outcomes() {
    let (mut registry, calls) = counting_registry(CommandId::NewDocument);
    let mut navigator = RecordingNavigator::default();

    assert_eq!(perform(MenuOutcome::None, &mut registry, &mut navigator), None);

    let run = MenuOutcome::Run(MenuAction::Command(CommandId::NewDocument));
    assert_eq!(perform(run, &mut registry, &mut navigator), Some(Dispatch::Handled));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let inert = MenuOutcome::Run(MenuAction::Command(CommandId::SetPaywall));
    assert_eq!(perform(inert, &mut registry, &mut navigator), Some(Dispatch::Unbound));

    let home = MenuOutcome::Run(MenuAction::Navigate("/".to_string()));
    assert_eq!(perform(home, &mut registry, &mut navigator), None);
    assert_eq!(navigator.paths, vec!["/"]);

    perform(
        MenuOutcome::OpenExternal("https://example.com/issues".to_string()),
        &mut registry,
        &mut navigator,
    );
    perform(
        MenuOutcome::SwitchApp("https://example.com/app".to_string()),
        &mut registry,
        &mut navigator,
    );
    assert_eq!(
        navigator.urls,
        vec!["https://example.com/issues", "https://example.com/app"]
    );
}

#[test]
fn test_launch_browser_failures_are_reported() {
    assert!(!launch_browser("", "https://example.com"));
    assert!(!launch_browser("   ", "https://example.com"));
    assert!(!launch_browser("/nonexistent/writerdesk-browser", "https://example.com"));
}

#[cfg(unix)]
#[test]
fn test_launch_browser_without_runtime() {
    assert!(launch_browser("true", "https://example.com"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_launch_browser_inside_runtime() {
    assert!(launch_browser("true", "https://example.com"));
    // The opener is waited on by a blocking task; give it a moment to finish
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
}
