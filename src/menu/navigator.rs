//! Navigation capability used by the menu bar.

use std::process::{Child, Command, Stdio};

/// Where menu and app-switcher activations send the user.
pub trait Navigator {
    /// In-app navigation to a literal path such as "/"
    fn navigate(&mut self, path: &str);

    /// Open a URL outside the application
    fn open_external(&mut self, url: &str);
}

/// Launch `url` with the configured opener (`xdg-open`, `open`, ...).
///
/// The child is waited on in the background; failures are logged, never
/// propagated.
pub fn launch_browser(browser_command: &str, url: &str) -> bool {
    let mut parts = browser_command.split_whitespace();
    let Some(program) = parts.next() else {
        log::warn!("No browser command configured, cannot open {}", url);
        return false;
    };

    match Command::new(program)
        .args(parts)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => {
            log::info!("Opened {} with {}", url, program);
            reap(child);
            true
        }
        Err(e) => {
            log::warn!("Failed to open {} with {}: {}", url, program, e);
            false
        }
    }
}

/// Wait for the opener off the UI thread so it does not linger as a zombie
fn reap(mut child: Child) {
    let wait = move || match child.wait() {
        Ok(status) if !status.success() => log::debug!("Browser command exited with {}", status),
        Ok(_) => {}
        Err(e) => log::warn!("Failed to wait for browser command: {}", e),
    };
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn_blocking(wait);
        }
        Err(_) => {
            std::thread::spawn(wait);
        }
    }
}
