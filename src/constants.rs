//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Product
pub const APP_NAME: &str = "Bitcoin Writer";
pub const APP_SUITE_NAME: &str = "Bitcoin Apps Suite";
pub const APP_SYMBOL: &str = "₿";
pub const HOME_PATH: &str = "/";

pub const ABOUT_TEXT: &str = "Bitcoin Writer v2.0\n\nDecentralized document writing on Bitcoin SV\n\n\
© 2025 The Bitcoin Corporation LTD\nRegistered in England and Wales • Company No. 16735102\n\n\
Built with HandCash integration";
pub const HELP_TEXT: &str = "Bitcoin Writer v2.0\n\nWrite, encrypt, and store documents on the Bitcoin blockchain";

// Default links
pub const DEFAULT_ISSUES_URL: &str = "https://github.com/bitcoin-apps-suite/bitcoin-writer/issues";
pub const DEFAULT_SOCIAL_URL: &str = "https://x.com/bitcoin_writer";
pub const SOCIAL_LINK_LABEL: &str = "Follow on X";

// Storefront text
pub const STORE_TITLE: &str = "Bitcoin Books";
pub const SEARCH_PLACEHOLDER: &str = "Search books, authors, topics...";
pub const NO_RESULTS_TITLE: &str = "No books found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search or filters";
pub const LOADING_CATALOG: &str = "Loading catalog...";

// Info messages
pub const INFO_COMING_SOON_OPEN: &str = "Open functionality coming soon";
pub const INFO_COMING_SOON_SAVE_AS: &str = "Save As functionality coming soon";
pub const INFO_NEW_DOCUMENT: &str = "✅ New document created";
pub const INFO_DOCUMENT_SAVED: &str = "✅ Document saved";
pub const INFO_TOKENIZE: &str = "Create NFT: tokenize the current document";
pub const INFO_SOCIAL_POST: &str = "Post to Twitter: share the current document";
pub const INFO_SIGNED_OUT: &str = "Signed out";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";
pub const STATUS_SHORTCUTS: &str = "/: search • f: filters • s: sort • v: view • c: cart • w: wishlist • F10: menu • ?: help • q: quit";

// Price slider (the control's declared range, in whole currency units)
pub const PRICE_SLIDER_MIN: u16 = 0;
pub const PRICE_SLIDER_MAX: u16 = 100;
pub const PRICE_SLIDER_STEP: u16 = 1;
pub const PRICE_SLIDER_PAGE: u16 = 10;

// UI Layout Constants
/// Terminal width below which the compact (mobile) menu bar is used
pub const COMPACT_WIDTH_DEFAULT: u16 = 80;
pub const COMPACT_WIDTH_MIN: u16 = 40;
pub const COMPACT_WIDTH_MAX: u16 = 200;
/// Width of the filter side panel
pub const FILTER_PANEL_WIDTH: u16 = 30;
/// Grid card geometry
pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 8;
/// Two clicks on the logo within this window count as a double click
pub const DOUBLE_CLICK_MS: u64 = 500;
/// Upper bound on in-memory log entries
pub const LOG_BUFFER_CAPACITY: usize = 1000;
