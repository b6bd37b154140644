//! Headless catalog storefront core.
//!
//! This module owns the book catalog data model and the pure state machine
//! behind the storefront view: search, category/format/price filters, sort
//! order, cart and wishlist membership, and the detail selection.
//!
//! # Module Components
//!
//! - [`provider`] - Data-provider seam ([`CatalogProvider`]) with the sample and JSON file sources
//! - [`filter`] - Filter/sort parameters and the visible-set derivation
//! - [`selection`] - Membership-only id sets used for the cart and wishlist
//! - [`state`] - [`CatalogState`] and its event reducer
//!
//! Nothing in here touches the terminal; the TUI layer in
//! [`crate::ui::components::catalog_component`] renders this state.

pub mod filter;
pub mod provider;
pub mod selection;
pub mod state;

pub use filter::{visible_items, FilterError, FilterState, PriceRange, SortKey};
pub use provider::{CatalogProvider, FileCatalog, SampleCatalog};
pub use selection::IdSet;
pub use state::{CatalogEffect, CatalogEvent, CatalogState, ViewMode};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors raised while loading or validating catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Item '{id}': invalid publication date '{value}'")]
    InvalidDate { id: String, value: String },

    #[error("Item '{id}': {reason}")]
    InvalidItem { id: String, reason: String },

    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Book category. The set is fixed; "all" is modelled as `None` by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beginner,
    Technical,
    Economics,
    Trading,
    History,
    Philosophy,
    Security,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Beginner,
        Category::Technical,
        Category::Economics,
        Category::Trading,
        Category::History,
        Category::Philosophy,
        Category::Security,
    ];

    /// Stable identifier used in catalog files and configuration
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Category::Beginner => "beginner",
            Category::Technical => "technical",
            Category::Economics => "economics",
            Category::Trading => "trading",
            Category::History => "history",
            Category::Philosophy => "philosophy",
            Category::Security => "security",
        }
    }

    /// Human-readable label shown in the filter panel
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Beginner => "Beginner Guides",
            Category::Technical => "Technical",
            Category::Economics => "Economics",
            Category::Trading => "Trading & Investment",
            Category::History => "History",
            Category::Philosophy => "Philosophy",
            Category::Security => "Security & Privacy",
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownVariant {
                kind: "category",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery format of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Ebook,
    Audiobook,
    Hardcover,
    Paperback,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Ebook, Format::Audiobook, Format::Hardcover, Format::Paperback];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Format::Ebook => "ebook",
            Format::Audiobook => "audiobook",
            Format::Hardcover => "hardcover",
            Format::Paperback => "paperback",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Format::Ebook => "E-book",
            Format::Audiobook => "Audiobook",
            Format::Hardcover => "Hardcover",
            Format::Paperback => "Paperback",
        }
    }
}

impl FromStr for Format {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownVariant {
                kind: "format",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry. Items are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub description: String,
    pub category: Category,
    pub published: NaiveDate,
    pub pages: u32,
    pub format: Format,
    pub cover_url: String,
    pub preview_url: Option<String>,
    pub featured: bool,
    pub bestseller: bool,
    pub tags: Vec<String>,
}

impl Item {
    /// Case-insensitive substring match against title, author and tags.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Percentage saved relative to the original price, if discounted
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original <= 0.0 {
            return None;
        }
        Some((((original - self.price) / original) * 100.0).round() as u32)
    }

    /// Split the rating into (full, half, empty) star counts out of five
    #[must_use]
    pub fn star_counts(&self) -> (usize, usize, usize) {
        let rating = self.rating.clamp(0.0, 5.0);
        let full = rating.floor() as usize;
        let half = usize::from(rating.fract() > 0.0);
        let empty = 5 - rating.ceil() as usize;
        (full, half, empty)
    }
}

/// Format a price the way the storefront shows it
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
