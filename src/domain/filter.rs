//! Visibility predicates over the derived catalog.

use super::app_state::Selection;
use super::entities::DerivedItem;

/// How the selected categories are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryMode {
    /// Keep items carrying at least one selected category.
    #[default]
    Include,
    /// Keep items carrying none of the selected categories.
    Exclude,
}

impl CategoryMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Include => "Include",
            Self::Exclude => "Exclude",
        }
    }
}

/// Single-choice status views over the catalog.
///
/// Every mode other than `All` replaces the budget and exclusion
/// predicates outright and combines with the category predicate only.
/// That bypass matches the shipped behavior and is intentional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Excluded,
    Wishlist,
    Affordable,
    Unaffordable,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 5] = [
        Self::All,
        Self::Excluded,
        Self::Wishlist,
        Self::Affordable,
        Self::Unaffordable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Excluded => "Excluded",
            Self::Wishlist => "Wishlist",
            Self::Affordable => "In Budget",
            Self::Unaffordable => "Over Budget",
        }
    }
}

/// The subset of the catalog visible under the current selection.
///
/// The show-excluded toggle is a complement view: it returns exactly the
/// excluded items and takes precedence over every other predicate.
pub fn visible_items(items: &[DerivedItem], selection: &Selection) -> Vec<DerivedItem> {
    if selection.show_excluded {
        return items
            .iter()
            .filter(|entry| selection.excluded.contains(entry.name()))
            .cloned()
            .collect();
    }

    items
        .iter()
        .filter(|entry| matches_selection(entry, selection))
        .cloned()
        .collect()
}

fn matches_selection(entry: &DerivedItem, selection: &Selection) -> bool {
    if !category_matches(entry, selection) {
        return false;
    }

    match selection.status_filter {
        StatusFilter::All => {
            entry.item.shell_cost <= selection.budget
                && !selection.excluded.contains(entry.name())
        }
        StatusFilter::Excluded => selection.excluded.contains(entry.name()),
        StatusFilter::Wishlist => selection.wishlist.contains_key(entry.name()),
        StatusFilter::Affordable => entry.item.shell_cost <= selection.budget,
        StatusFilter::Unaffordable => entry.item.shell_cost > selection.budget,
    }
}

fn category_matches(entry: &DerivedItem, selection: &Selection) -> bool {
    if selection.selected_categories.is_empty() {
        return true;
    }

    let hit = entry
        .item
        .categories
        .iter()
        .any(|category| selection.selected_categories.contains(category));

    match selection.category_mode {
        CategoryMode::Include => hit,
        CategoryMode::Exclude => !hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::app_state::Selection;
    use crate::domain::metrics::derive_item;
    use crate::domain::ShopItem;
    use std::collections::{BTreeMap, BTreeSet};

    fn derived(name: &str, shell_cost: f64, category: &str) -> DerivedItem {
        let mut categories = BTreeSet::new();
        categories.insert(category.to_string());
        derive_item(ShopItem {
            name: name.to_string(),
            shell_cost,
            retail_price: 10.0,
            resale_price: 5.0,
            categories,
            links: BTreeMap::new(),
            image: None,
        })
    }

    fn catalog() -> Vec<DerivedItem> {
        vec![
            derived("pico", 75.0, "hardware"),
            derived("flipper", 950.0, "hardware"),
            derived("vpn", 216.0, "subscription"),
            derived("factorio", 175.0, "games"),
        ]
    }

    #[test]
    fn budget_bounds_every_visible_item() {
        let mut selection = Selection::default();
        selection.budget = 300.0;
        let visible = visible_items(&catalog(), &selection);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|entry| entry.item.shell_cost <= 300.0));
    }

    #[test]
    fn excluded_names_are_hidden() {
        let mut selection = Selection::default();
        selection.budget = 10_000.0;
        selection.excluded.insert("flipper".to_string());
        let visible = visible_items(&catalog(), &selection);
        assert!(visible.iter().all(|entry| entry.name() != "flipper"));
    }

    #[test]
    fn excluding_a_missing_name_changes_nothing() {
        let mut selection = Selection::default();
        selection.budget = 10_000.0;
        let before = visible_items(&catalog(), &selection);
        selection.excluded.insert("no-such-item".to_string());
        assert_eq!(visible_items(&catalog(), &selection), before);
    }

    #[test]
    fn category_exclude_mode_negates_the_match() {
        let mut selection = Selection::default();
        selection.budget = 10_000.0;
        selection.selected_categories.insert("hardware".to_string());
        selection.category_mode = CategoryMode::Exclude;
        let visible = visible_items(&catalog(), &selection);
        assert!(visible
            .iter()
            .all(|entry| !entry.item.has_category("hardware")));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn status_modes_ignore_budget_and_exclusion() {
        let mut selection = Selection::default();
        selection.budget = 100.0;
        selection.excluded.insert("flipper".to_string());
        selection.status_filter = StatusFilter::Unaffordable;

        let visible = visible_items(&catalog(), &selection);
        let names: Vec<_> = visible.iter().map(|entry| entry.name()).collect();
        // The excluded flipper still shows: status views bypass exclusion.
        assert_eq!(names, ["flipper", "vpn", "factorio"]);
    }

    #[test]
    fn wishlist_status_selects_wishlist_rows_only() {
        let mut selection = Selection::default();
        selection.budget = 100.0;
        selection.wishlist.insert("factorio".to_string(), 2);
        selection.status_filter = StatusFilter::Wishlist;

        let visible = visible_items(&catalog(), &selection);
        let names: Vec<_> = visible.iter().map(|entry| entry.name()).collect();
        assert_eq!(names, ["factorio"]);
    }

    #[test]
    fn show_excluded_wins_over_status_views() {
        let mut selection = Selection::default();
        selection.excluded.insert("vpn".to_string());
        selection.status_filter = StatusFilter::Affordable;
        selection.show_excluded = true;

        let visible = visible_items(&catalog(), &selection);
        let names: Vec<_> = visible.iter().map(|entry| entry.name()).collect();
        assert_eq!(names, ["vpn"]);
    }

    #[test]
    fn zero_budget_hides_all_priced_items() {
        let mut selection = Selection::default();
        selection.budget = 0.0;
        assert!(visible_items(&catalog(), &selection).is_empty());
    }
}
