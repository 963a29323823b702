//! Derived value metrics for catalog items.

use super::entities::{DerivedItem, ShopItem};

/// Attach the derived ratios and value score to one catalog item.
///
/// Total over any item: a zero (or otherwise non-positive) retail or
/// resale price yields "not applicable" instead of an error, and the
/// value score collapses to `0`.
pub fn derive_item(item: ShopItem) -> DerivedItem {
    let shell_to_retail = price_ratio(item.shell_cost, item.retail_price);
    let shell_to_resale = price_ratio(item.shell_cost, item.resale_price);
    let value_score = if item.retail_price > 0.0 {
        (item.retail_price / item.shell_cost * 100.0).round() as u32
    } else {
        0
    };

    DerivedItem {
        item,
        shell_to_retail,
        shell_to_resale,
        value_score,
    }
}

/// Derive the whole catalog once. The catalog never changes for the
/// lifetime of the process, so callers hold onto the result instead of
/// re-deriving per render.
pub fn derive_catalog(items: Vec<ShopItem>) -> Vec<DerivedItem> {
    items.into_iter().map(derive_item).collect()
}

fn price_ratio(shell_cost: f64, price: f64) -> Option<f64> {
    if price > 0.0 {
        Some(shell_cost / price)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn item(shell_cost: f64, retail_price: f64, resale_price: f64) -> ShopItem {
        ShopItem {
            name: "probe".to_string(),
            shell_cost,
            retail_price,
            resale_price,
            categories: BTreeSet::new(),
            links: BTreeMap::new(),
            image: None,
        }
    }

    #[test]
    fn ratios_and_score_for_priced_item() {
        let derived = derive_item(item(100.0, 50.0, 25.0));
        assert_eq!(derived.shell_to_retail, Some(2.0));
        assert_eq!(derived.shell_to_resale, Some(4.0));
        assert_eq!(derived.value_score, 50);
    }

    #[test]
    fn zero_retail_means_not_applicable_and_zero_score() {
        let derived = derive_item(item(150.0, 0.0, 0.0));
        assert_eq!(derived.shell_to_retail, None);
        assert_eq!(derived.shell_to_resale, None);
        assert_eq!(derived.value_score, 0);
    }

    #[test]
    fn score_rounds_to_nearest_percent() {
        // 6.99 / 32 * 100 = 21.84… → 22
        let derived = derive_item(item(32.0, 6.99, 3.5));
        assert_eq!(derived.value_score, 22);
    }

    #[test]
    fn derive_catalog_keeps_order() {
        let mut first = item(10.0, 5.0, 1.0);
        first.name = "first".to_string();
        let mut second = item(20.0, 0.0, 0.0);
        second.name = "second".to_string();

        let derived = derive_catalog(vec![first, second]);
        assert_eq!(derived[0].name(), "first");
        assert_eq!(derived[1].name(), "second");
    }
}
