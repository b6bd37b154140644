//! Sibling applications listed in the app-switcher overlay.

/// One row of the app switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    /// Accent colour as `#rrggbb`
    pub color: String,
    pub url: String,
    pub current: bool,
    pub disabled: bool,
}

impl AppEntry {
    fn live(name: &str, color: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            url: url.to_string(),
            current: false,
            disabled: false,
        }
    }

    fn soon(name: &str, color: &str) -> Self {
        Self {
            disabled: true,
            ..Self::live(name, color, "#")
        }
    }

    /// Activating this entry leaves the app. Current, disabled and
    /// placeholder entries do nothing.
    #[must_use]
    pub fn is_navigable(&self) -> bool {
        !self.disabled && !self.current && self.url != "#"
    }

    /// Badge shown next to the name
    #[must_use]
    pub fn badge(&self) -> Option<&'static str> {
        if self.current {
            Some("Current")
        } else if self.disabled {
            Some("Soon")
        } else {
            None
        }
    }
}

/// The suite as shipped.
#[must_use]
pub fn default_apps() -> Vec<AppEntry> {
    vec![
        AppEntry::live("Bitcoin Apps Store", "#f97316", "https://www.bitcoinapps.store/"),
        AppEntry::soon("Bitcoin Auth", "#ef4444"),
        AppEntry::live("Bitcoin Calendar", "#d946ef", "https://bitcoin-calendar.vercel.app"),
        AppEntry::soon("Bitcoin Chat", "#ff6500"),
        AppEntry::live("Bitcoin Code", "#06b6d4", "https://bitcoin-code.vercel.app/"),
        AppEntry::soon("Bitcoin Domains", "#eab308"),
        AppEntry::soon("Bitcoin Draw", "#10b981"),
        AppEntry::live("Bitcoin Drive", "#22c55e", "https://bitcoin-drive.vercel.app"),
        AppEntry::live("Bitcoin Email", "#06b6d4", "https://bitcoin-email.vercel.app"),
        AppEntry::live("Bitcoin Exchange", "#10b981", "https://bitcoin-exchange.vercel.app"),
        AppEntry::live("Bitcoin Jobs", "#6b7280", "https://bitcoin-jobs.vercel.app/"),
        AppEntry::live("Bitcoin Music", "#8b5cf6", "https://bitcoin-music.vercel.app"),
        AppEntry::live("Bitcoin Paint", "#a855f7", "https://bitcoin-paint.vercel.app"),
        AppEntry::soon("Bitcoin Pics", "#ec4899"),
        AppEntry::soon("Bitcoin Registry", "#f43f5e"),
        AppEntry::live("Bitcoin Search", "#6b7280", "https://bitcoin-search.vercel.app"),
        AppEntry::live("Bitcoin Shares", "#f43f5e", "https://bitcoin-shares.vercel.app"),
        AppEntry::live("Bitcoin Spreadsheets", "#3b82f6", "https://bitcoin-spreadsheet.vercel.app"),
        AppEntry::live("Bitcoin Video", "#65a30d", "https://bitcoin-video-nine.vercel.app"),
        AppEntry::live("Bitcoin Wallet", "#f59e0b", "https://bitcoin-wallet-sable.vercel.app"),
        AppEntry {
            current: true,
            ..AppEntry::live("Bitcoin Writer", "#ff9500", "#")
        },
    ]
}
