use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::entities::{DerivedItem, ShopItem};
use super::filter::{self, CategoryMode, StatusFilter};
use super::metrics;
use super::recommend::RecommendMetric;
use super::sort::{self, SortDirection, SortKey};

/// Budget a fresh session starts with.
pub const DEFAULT_BUDGET: f64 = 1_800.0;

/// Color scheme for the current session. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Lagoon,
    Abyss,
    Tidepool,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Lagoon, Self::Abyss, Self::Tidepool];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Lagoon => "Lagoon",
            Theme::Abyss => "Abyss",
            Theme::Tidepool => "Tidepool",
        }
    }
}

/// Everything the user can toggle while browsing the catalog.
///
/// Owned by the UI layer and handed into the pure domain functions on
/// every recompute; none of them keep state of their own. Only the
/// wishlist outlives the session.
#[derive(Clone, Debug)]
pub struct Selection {
    pub excluded: HashSet<String>,
    /// Item name → quantity. Quantities are always ≥ 1; setting one to
    /// zero or below deletes the entry instead.
    pub wishlist: BTreeMap<String, u32>,
    pub selected_categories: BTreeSet<String>,
    pub category_mode: CategoryMode,
    pub status_filter: StatusFilter,
    pub show_excluded: bool,
    pub budget: f64,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub recommend_metric: RecommendMetric,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            excluded: HashSet::new(),
            wishlist: BTreeMap::new(),
            selected_categories: BTreeSet::new(),
            category_mode: CategoryMode::default(),
            status_filter: StatusFilter::default(),
            show_excluded: false,
            budget: DEFAULT_BUDGET,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            recommend_metric: RecommendMetric::default(),
        }
    }
}

impl Selection {
    /// Excluding a name the catalog does not know is a harmless no-op.
    pub fn toggle_excluded(&mut self, name: &str) {
        if !self.excluded.remove(name) {
            self.excluded.insert(name.to_string());
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn quantity_of(&self, name: &str) -> u32 {
        self.wishlist.get(name).copied().unwrap_or(0)
    }

    /// Set a wishlist quantity. Anything at or below zero removes the
    /// entry; zero-quantity lines never linger in the mapping.
    pub fn set_quantity(&mut self, name: &str, quantity: i64) {
        if quantity <= 0 {
            self.wishlist.remove(name);
        } else {
            self.wishlist.insert(name.to_string(), quantity as u32);
        }
    }

    pub fn add_to_wishlist(&mut self, name: &str) {
        let next = self.quantity_of(name) as i64 + 1;
        self.set_quantity(name, next);
    }

    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
    }

    /// Column-header click: same key flips the direction, a new key
    /// restarts ascending.
    pub fn request_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        }
    }
}

/// Session state: the derived catalog plus the user's selections.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub catalog: Vec<DerivedItem>,
    pub selection: Selection,
    pub theme: Theme,
}

impl AppState {
    pub fn with_catalog(items: Vec<ShopItem>) -> Self {
        Self {
            catalog: metrics::derive_catalog(items),
            selection: Selection::default(),
            theme: Theme::default(),
        }
    }

    /// Every distinct category in the catalog, for the filter bar.
    pub fn categories(&self) -> Vec<String> {
        let mut set = BTreeSet::new();
        for entry in &self.catalog {
            for category in &entry.item.categories {
                set.insert(category.clone());
            }
        }
        set.into_iter().collect()
    }

    /// The filtered catalog in the current sort order.
    pub fn visible_sorted(&self) -> Vec<DerivedItem> {
        let mut visible = filter::visible_items(&self.catalog, &self.selection);
        sort::sort_items(
            &mut visible,
            self.selection.sort_key,
            self.selection.sort_direction,
        );
        visible
    }

    pub fn apply_persisted_wishlist(&mut self, wishlist: BTreeMap<String, u32>) {
        self.selection.wishlist = wishlist;
        self.selection.wishlist.retain(|_, quantity| *quantity > 0);
    }

    pub fn wishlist_snapshot(&self) -> BTreeMap<String, u32> {
        self.selection.wishlist.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    fn item(name: &str, shell_cost: f64, category: &str) -> ShopItem {
        let mut categories = BTreeSet::new();
        categories.insert(category.to_string());
        ShopItem {
            name: name.to_string(),
            shell_cost,
            retail_price: 10.0,
            resale_price: 5.0,
            categories,
            links: Map::new(),
            image: None,
        }
    }

    #[test]
    fn setting_quantity_to_zero_removes_the_entry() {
        let mut selection = Selection::default();
        selection.set_quantity("pinecil", 3);
        assert_eq!(selection.quantity_of("pinecil"), 3);

        selection.set_quantity("pinecil", 0);
        assert!(!selection.wishlist.contains_key("pinecil"));
    }

    #[test]
    fn negative_quantities_also_remove() {
        let mut selection = Selection::default();
        selection.set_quantity("pinecil", 2);
        selection.set_quantity("pinecil", -4);
        assert!(selection.wishlist.is_empty());
    }

    #[test]
    fn add_to_wishlist_increments() {
        let mut selection = Selection::default();
        selection.add_to_wishlist("duck");
        selection.add_to_wishlist("duck");
        assert_eq!(selection.quantity_of("duck"), 2);
    }

    #[test]
    fn sort_request_toggles_direction_on_repeat() {
        let mut selection = Selection::default();
        selection.request_sort(SortKey::RetailPrice);
        assert_eq!(selection.sort_key, SortKey::RetailPrice);
        assert_eq!(selection.sort_direction, SortDirection::Ascending);

        selection.request_sort(SortKey::RetailPrice);
        assert_eq!(selection.sort_direction, SortDirection::Descending);

        selection.request_sort(SortKey::Name);
        assert_eq!(selection.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn persisted_wishlist_drops_zero_quantities() {
        let mut state = AppState::with_catalog(vec![item("duck", 75.0, "trivial")]);
        let mut stored = Map::new();
        stored.insert("duck".to_string(), 2u32);
        stored.insert("ghost".to_string(), 0u32);
        state.apply_persisted_wishlist(stored);
        assert_eq!(state.selection.wishlist.len(), 1);
        assert_eq!(state.selection.quantity_of("duck"), 2);
    }

    #[test]
    fn categories_are_unique_and_sorted() {
        let state = AppState::with_catalog(vec![
            item("a", 10.0, "hardware"),
            item("b", 10.0, "games"),
            item("c", 10.0, "hardware"),
        ]);
        assert_eq!(state.categories(), ["games", "hardware"]);
    }
}
