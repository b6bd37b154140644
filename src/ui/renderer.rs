//! Terminal setup and the main event loop

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::catalog::CatalogProvider;
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Action, Component, EventHandler};

/// Raw mode, alternate screen and (optionally) mouse capture, released on drop
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse_capture: bool,
}

impl TerminalGuard {
    pub fn enter(mouse_capture: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        let entered = if mouse_capture {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        } else {
            execute!(stdout, EnterAlternateScreen)
        };
        if let Err(e) = entered {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter the alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                return Err(e).context("Failed to create terminal");
            }
        };

        Ok(Self { terminal, mouse_capture })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {}", e);
        }
        let restored = if self.mouse_capture {
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
        } else {
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
        };
        if let Err(e) = restored {
            log::warn!("Failed to leave the alternate screen: {}", e);
        }
        if let Err(e) = self.terminal.show_cursor() {
            log::warn!("Failed to show cursor: {}", e);
        }
    }
}

/// Load the catalog in the background and report back through the app channel
fn spawn_catalog_load(provider: Arc<dyn CatalogProvider>, app: &AppComponent) {
    let tx = app.action_sender();
    tokio::spawn(async move {
        let action = match provider.list_items().await {
            Ok(items) => Action::CatalogLoaded(items),
            Err(e) => Action::CatalogLoadFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            log::debug!("Catalog loaded after the UI exited");
        }
    });
}

/// Run the TUI until the user quits. A catalog load failure ends the
/// session with an error.
pub async fn run_app(config: Config, provider: Arc<dyn CatalogProvider>, logger: Logger) -> Result<()> {
    let mouse_capture = config.ui.mouse_enabled;
    let mut app = AppComponent::new(config, logger);
    spawn_catalog_load(provider, &app);

    let mut guard = TerminalGuard::enter(mouse_capture)?;
    let mut event_handler = EventHandler::new();

    loop {
        guard.terminal().draw(|f| app.render(f, f.area()))?;

        let event = event_handler.next_event().await?;
        app.handle_event(event);
        app.process_background_actions();

        if app.should_quit() {
            break;
        }
    }

    drop(guard);
    match app.fatal_error() {
        Some(error) => anyhow::bail!("Failed to load catalog: {}", error),
        None => Ok(()),
    }
}
