//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Rating stars
#[derive(Debug, Clone)]
pub struct RatingIcons {
    pub full: &'static str,
    pub half: &'static str,
    pub empty: &'static str,
}

/// Per-item controls and badges
#[derive(Debug, Clone)]
pub struct ItemIcons {
    pub cart: &'static str,
    pub in_cart: &'static str,
    pub wishlist: &'static str,
    pub in_wishlist: &'static str,
    pub bestseller: &'static str,
    pub featured: &'static str,
    pub preview: &'static str,
}

/// Menu bar glyphs
#[derive(Debug, Clone)]
pub struct MenuIcons {
    pub hamburger: &'static str,
    pub close: &'static str,
    pub connected: &'static str,
    pub disconnected: &'static str,
    pub submenu: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub search: &'static str,
    pub filters: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub rating: RatingIcons,
    pub item: ItemIcons,
    pub menu: MenuIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            rating: RatingIcons {
                full: "★",
                half: "⯪",
                empty: "☆",
            },
            item: ItemIcons {
                cart: "🛒",
                in_cart: "✅",
                wishlist: "🤍",
                in_wishlist: "❤️",
                bestseller: "🏆",
                featured: "✨",
                preview: "👁",
            },
            menu: MenuIcons {
                hamburger: "☰",
                close: "✕",
                connected: "🟢",
                disconnected: "⚪",
                submenu: "▸",
            },
            ui: UiIcons {
                search: "🔍",
                filters: "🎚",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            rating: RatingIcons {
                full: "★",
                half: "⯪",
                empty: "☆",
            },
            item: ItemIcons {
                cart: "⊕",
                in_cart: "✓",
                wishlist: "♡",
                in_wishlist: "♥",
                bestseller: "◆",
                featured: "✦",
                preview: "◉",
            },
            menu: MenuIcons {
                hamburger: "☰",
                close: "✕",
                connected: "●",
                disconnected: "○",
                submenu: "▸",
            },
            ui: UiIcons {
                search: "⌕",
                filters: "≡",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            rating: RatingIcons {
                full: "*",
                half: "+",
                empty: ".",
            },
            item: ItemIcons {
                cart: "[+]",
                in_cart: "[x]",
                wishlist: "<3",
                in_wishlist: "<3!",
                bestseller: "#1",
                featured: "!",
                preview: "o",
            },
            menu: MenuIcons {
                hamburger: "=",
                close: "x",
                connected: "*",
                disconnected: "o",
                submenu: ">",
            },
            ui: UiIcons {
                search: "/",
                filters: "=",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
        }
    }

    /// Render star counts as produced by `Item::star_counts`
    #[must_use]
    pub fn stars(&self, full: usize, half: usize, empty: usize) -> String {
        let rating = self.icons().rating;
        let mut out = String::new();
        out.push_str(&rating.full.repeat(full));
        out.push_str(&rating.half.repeat(half));
        out.push_str(&rating.empty.repeat(empty));
        out
    }

    #[must_use]
    pub fn cart(&self, in_cart: bool) -> &'static str {
        let item = self.icons().item;
        if in_cart {
            item.in_cart
        } else {
            item.cart
        }
    }

    #[must_use]
    pub fn wishlist(&self, wished: bool) -> &'static str {
        let item = self.icons().item;
        if wished {
            item.in_wishlist
        } else {
            item.wishlist
        }
    }

    #[must_use]
    pub fn connection(&self, connected: bool) -> &'static str {
        let menu = self.icons().menu;
        if connected {
            menu.connected
        } else {
            menu.disconnected
        }
    }

    #[must_use]
    pub fn hamburger(&self, open: bool) -> &'static str {
        let menu = self.icons().menu;
        if open {
            menu.close
        } else {
            menu.hamburger
        }
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }
}
