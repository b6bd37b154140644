//! Storefront state and its event reducer.
//!
//! [`CatalogState`] is created once from the provider's item list and then
//! changes only through [`CatalogState::apply`]. The visible set is
//! recomputed eagerly after any event that can affect it, so readers never
//! observe a stale view.

use super::filter::{visible_indices, FilterState, SortKey};
use super::selection::IdSet;
use super::{Category, Format, Item};
use serde::{Deserialize, Serialize};

/// Rendering hint for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Everything the storefront can be asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    SetQuery(String),
    SetCategory(Option<Category>),
    SetFormat(Option<Format>),
    SetMaxPrice(f64),
    SetSort(SortKey),
    SetViewMode(ViewMode),
    AddToCart(String),
    RemoveFromCart(String),
    /// Single cart button: remove when present, add otherwise
    ToggleCart(String),
    ToggleWishlist(String),
    Select(String),
    CloseDetail,
    ResetFilters,
}

/// Observable side effects produced by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEffect {
    /// The cart changed; carries the new cardinality
    CartChanged(usize),
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    items: Vec<Item>,
    filter: FilterState,
    visible: Vec<usize>,
    cart: IdSet,
    wishlist: IdSet,
    selected: Option<String>,
    view_mode: ViewMode,
}

impl CatalogState {
    /// Build the state from a freshly loaded item list with default filters.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_filter(items, FilterState::default())
    }

    #[must_use]
    pub fn with_filter(items: Vec<Item>, filter: FilterState) -> Self {
        let visible = visible_indices(&items, &filter);
        Self {
            items,
            filter,
            visible,
            cart: IdSet::new(),
            wishlist: IdSet::new(),
            selected: None,
            view_mode: ViewMode::default(),
        }
    }

    /// Apply one event and return the effects it produced.
    pub fn apply(&mut self, event: CatalogEvent) -> Vec<CatalogEffect> {
        let mut effects = Vec::new();
        match event {
            CatalogEvent::SetQuery(query) => {
                self.filter.query = query;
                self.recompute();
            }
            CatalogEvent::SetCategory(category) => {
                self.filter.category = category;
                self.recompute();
            }
            CatalogEvent::SetFormat(format) => {
                self.filter.format = format;
                self.recompute();
            }
            CatalogEvent::SetMaxPrice(max) => {
                self.filter.price.set_max(max);
                self.recompute();
            }
            CatalogEvent::SetSort(sort) => {
                self.filter.sort = sort;
                self.recompute();
            }
            CatalogEvent::SetViewMode(mode) => {
                self.view_mode = mode;
            }
            CatalogEvent::AddToCart(id) => {
                if self.cart.insert(&id) {
                    effects.push(CatalogEffect::CartChanged(self.cart.len()));
                }
            }
            CatalogEvent::RemoveFromCart(id) => {
                if self.cart.remove(&id) {
                    effects.push(CatalogEffect::CartChanged(self.cart.len()));
                }
            }
            CatalogEvent::ToggleCart(id) => {
                self.cart.toggle(&id);
                effects.push(CatalogEffect::CartChanged(self.cart.len()));
            }
            CatalogEvent::ToggleWishlist(id) => {
                self.wishlist.toggle(&id);
            }
            CatalogEvent::Select(id) => {
                if self.item(&id).is_some() {
                    self.selected = Some(id);
                } else {
                    log::warn!("Catalog: ignoring selection of unknown item '{}'", id);
                }
            }
            CatalogEvent::CloseDetail => {
                self.selected = None;
            }
            CatalogEvent::ResetFilters => {
                let sort = self.filter.sort;
                self.filter = FilterState {
                    sort,
                    ..FilterState::default()
                };
                self.selected = None;
                self.recompute();
            }
        }
        effects
    }

    pub fn add_to_cart(&mut self, id: &str) -> Vec<CatalogEffect> {
        self.apply(CatalogEvent::AddToCart(id.to_string()))
    }

    pub fn remove_from_cart(&mut self, id: &str) -> Vec<CatalogEffect> {
        self.apply(CatalogEvent::RemoveFromCart(id.to_string()))
    }

    pub fn toggle_wishlist(&mut self, id: &str) -> Vec<CatalogEffect> {
        self.apply(CatalogEvent::ToggleWishlist(id.to_string()))
    }

    fn recompute(&mut self) {
        self.visible = visible_indices(&self.items, &self.filter);
    }

    /// The full, unfiltered item list in source order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The filtered and sorted items currently shown
    pub fn visible(&self) -> impl Iterator<Item = &Item> + '_ {
        self.visible.iter().map(move |&index| &self.items[index])
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn visible_at(&self, position: usize) -> Option<&Item> {
        self.visible.get(position).map(|&index| &self.items[index])
    }

    /// Position of an item inside the visible set
    #[must_use]
    pub fn visible_position(&self, id: &str) -> Option<usize> {
        self.visible.iter().position(|&index| self.items[index].id == id)
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn cart(&self) -> &IdSet {
        &self.cart
    }

    #[must_use]
    pub fn wishlist(&self) -> &IdSet {
        &self.wishlist
    }

    #[must_use]
    pub fn in_cart(&self, id: &str) -> bool {
        self.cart.contains(id)
    }

    #[must_use]
    pub fn in_wishlist(&self, id: &str) -> bool {
        self.wishlist.contains(id)
    }

    /// The item shown in the detail modal, if any
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_deref().and_then(|id| self.item(id))
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }
}
