//! Best/worst value slices over the currently visible catalog.

use super::entities::DerivedItem;
use super::sort::{sort_items, SortDirection, SortKey};

/// How many items each ranking panel shows.
pub const RANKING_SIZE: usize = 8;

/// Top value-for-shells picks among the given (already filtered) items.
/// Items without a retail price never rank.
pub fn best_value(visible: &[DerivedItem]) -> Vec<DerivedItem> {
    ranked(visible, SortDirection::Descending)
}

/// The other end of the list: the weakest value among the visible items.
pub fn worst_value(visible: &[DerivedItem]) -> Vec<DerivedItem> {
    ranked(visible, SortDirection::Ascending)
}

fn ranked(visible: &[DerivedItem], direction: SortDirection) -> Vec<DerivedItem> {
    let mut entries: Vec<DerivedItem> = visible
        .iter()
        .filter(|entry| entry.item.retail_price > 0.0)
        .cloned()
        .collect();
    sort_items(&mut entries, SortKey::ValueScore, direction);
    entries.truncate(RANKING_SIZE);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::derive_item;
    use crate::domain::ShopItem;
    use std::collections::{BTreeMap, BTreeSet};

    fn derived(name: &str, shell_cost: f64, retail_price: f64) -> DerivedItem {
        derive_item(ShopItem {
            name: name.to_string(),
            shell_cost,
            retail_price,
            resale_price: 0.0,
            categories: BTreeSet::new(),
            links: BTreeMap::new(),
            image: None,
        })
    }

    fn sample() -> Vec<DerivedItem> {
        vec![
            derived("yubikey", 110.0, 55.0), // score 50
            derived("badge", 100.0, 0.0),    // n/a, never ranks
            derived("notebook", 200.0, 15.0), // score 8
            derived("proxmark", 140.0, 70.0), // score 50
            derived("duck", 75.0, 10.0),     // score 13
        ]
    }

    #[test]
    fn rankings_never_include_zero_retail_items() {
        let items = sample();
        assert!(best_value(&items).iter().all(|e| e.item.retail_price > 0.0));
        assert!(worst_value(&items).iter().all(|e| e.item.retail_price > 0.0));
    }

    #[test]
    fn best_value_sorts_descending_with_catalog_tiebreak() {
        let names: Vec<String> = best_value(&sample())
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, ["yubikey", "proxmark", "duck", "notebook"]);
    }

    #[test]
    fn worst_value_sorts_ascending() {
        let names: Vec<String> = worst_value(&sample())
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, ["notebook", "duck", "yubikey", "proxmark"]);
    }

    #[test]
    fn panels_cap_at_eight_entries() {
        let items: Vec<DerivedItem> = (0..12)
            .map(|i| derived(&format!("item-{i}"), 100.0, 10.0 + i as f64))
            .collect();
        assert_eq!(best_value(&items).len(), RANKING_SIZE);
        assert_eq!(worst_value(&items).len(), RANKING_SIZE);
    }
}
