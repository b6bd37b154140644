//! Filter and sort parameters and the visible-set derivation.

use super::{Category, Format, Item};
use crate::constants::{PRICE_SLIDER_MAX, PRICE_SLIDER_MIN};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("price range lower bound {min} exceeds upper bound {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
}

/// Inclusive price bounds. `min <= max` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Result<Self, FilterError> {
        if min > max || min.is_nan() || max.is_nan() {
            return Err(FilterError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Move the upper bound. Values below the lower bound pin it to the
    /// lower bound; NaN leaves the range unchanged.
    pub fn set_max(&mut self, max: f64) {
        if max.is_nan() {
            return;
        }
        self.max = if max < self.min { self.min } else { max };
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: f64::from(PRICE_SLIDER_MIN),
            max: f64::from(PRICE_SLIDER_MAX),
        }
    }
}

/// Sort order applied to the visible set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
    Bestseller,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Newest,
        SortKey::Bestseller,
    ];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Bestseller => "bestseller",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Customer Rating",
            SortKey::Newest => "Newest First",
            SortKey::Bestseller => "Best Sellers",
        }
    }

    /// Next key in the sort dropdown order, wrapping around
    #[must_use]
    pub fn next(self) -> SortKey {
        let index = SortKey::ALL.iter().position(|k| *k == self).unwrap_or(0);
        SortKey::ALL[(index + 1) % SortKey::ALL.len()]
    }

    /// Comparator for two items under this key. Ties compare `Equal`.
    #[must_use]
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.total_cmp(&b.price),
            SortKey::PriceHigh => b.price.total_cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Newest => b.published.cmp(&a.published),
            SortKey::Bestseller => b.bestseller.cmp(&a.bestseller),
            SortKey::Featured => b.featured.cmp(&a.featured),
        }
    }
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.value() == s)
            .ok_or_else(|| FilterError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Query, filters and sort key driving the visible set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub query: String,
    /// `None` means all categories
    pub category: Option<Category>,
    /// `None` means all formats
    pub format: Option<Format>,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl FilterState {
    /// Conjunctive inclusion predicate.
    #[must_use]
    pub fn includes(&self, item: &Item) -> bool {
        let needle = self.query.to_lowercase();
        self.includes_with_needle(item, &needle)
    }

    fn includes_with_needle(&self, item: &Item, needle: &str) -> bool {
        item.matches_query(needle)
            && self.category.map_or(true, |c| c == item.category)
            && self.format.map_or(true, |f| f == item.format)
            && self.price.contains(item.price)
    }

    /// True when every parameter except the sort key is at its default
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.category.is_none() && self.format.is_none() && self.price == PriceRange::default()
    }
}

/// Filter then stably sort `items`. Never mutates the source slice.
#[must_use]
pub fn visible_items<'a>(items: &'a [Item], filter: &FilterState) -> Vec<&'a Item> {
    let needle = filter.query.to_lowercase();
    let mut visible: Vec<&Item> = items
        .iter()
        .filter(|item| filter.includes_with_needle(item, &needle))
        .collect();
    visible.sort_by(|a, b| filter.sort.compare(a, b));
    visible
}

/// Index-based variant used by [`super::CatalogState`] to cache the view.
#[must_use]
pub fn visible_indices(items: &[Item], filter: &FilterState) -> Vec<usize> {
    let needle = filter.query.to_lowercase();
    let mut visible: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.includes_with_needle(item, &needle))
        .map(|(index, _)| index)
        .collect();
    visible.sort_by(|&a, &b| filter.sort.compare(&items[a], &items[b]));
    visible
}
