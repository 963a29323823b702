//! Greedy budget-bounded selection over the wishlist.
//!
//! Not a knapsack solver: one deterministic pass over the wishlist in
//! metric order, accepting whole lines while they fit the budget.

use std::collections::BTreeMap;

use super::entities::DerivedItem;
use super::sort::{compare_values, sort_value, SortDirection, SortKey};

/// Which metric orders the wishlist before the greedy pass. Each metric
/// has a fixed direction; it is not user-configurable per metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecommendMetric {
    /// Highest value score first.
    #[default]
    ValueScore,
    /// Cheapest first.
    ShellCost,
    /// Highest retail price first.
    RetailPrice,
}

impl RecommendMetric {
    pub const ALL: [RecommendMetric; 3] = [Self::ValueScore, Self::ShellCost, Self::RetailPrice];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ValueScore => "Best value first",
            Self::ShellCost => "Cheapest first",
            Self::RetailPrice => "Highest retail first",
        }
    }

    fn sort_key(&self) -> SortKey {
        match self {
            Self::ValueScore => SortKey::ValueScore,
            Self::ShellCost => SortKey::ShellCost,
            Self::RetailPrice => SortKey::RetailPrice,
        }
    }

    fn direction(&self) -> SortDirection {
        match self {
            Self::ValueScore => SortDirection::Descending,
            Self::ShellCost => SortDirection::Ascending,
            Self::RetailPrice => SortDirection::Descending,
        }
    }
}

/// One accepted wishlist line: the item, the requested quantity, and the
/// full line cost (`shell_cost × quantity`).
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendedLine {
    pub item: DerivedItem,
    pub quantity: u32,
    pub line_cost: f64,
}

/// The greedy pick: accepted lines in acceptance order plus their summed
/// cost. `total_cost` never exceeds the budget passed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recommendation {
    pub lines: Vec<RecommendedLine>,
    pub total_cost: f64,
}

impl Recommendation {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pick a budget-fitting subset of the wishlist.
///
/// Wishlist names missing from the catalog are dropped silently.
/// Resolution walks the catalog, so metric ties keep catalog order.
/// Lines are all-or-nothing: a line whose full cost would push the
/// running total over budget is skipped whole and the pass continues.
pub fn recommend_purchases(
    catalog: &[DerivedItem],
    wishlist: &BTreeMap<String, u32>,
    budget: f64,
    metric: RecommendMetric,
) -> Recommendation {
    let mut entries: Vec<(&DerivedItem, u32)> = catalog
        .iter()
        .filter_map(|entry| {
            wishlist
                .get(entry.name())
                .copied()
                .filter(|quantity| *quantity > 0)
                .map(|quantity| (entry, quantity))
        })
        .collect();

    let key = metric.sort_key();
    let direction = metric.direction();
    entries.sort_by(|(a, _), (b, _)| {
        let ordering = compare_values(&sort_value(a, key), &sort_value(b, key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let mut lines = Vec::new();
    let mut total_cost = 0.0;
    for (entry, quantity) in entries {
        let line_cost = entry.item.shell_cost * quantity as f64;
        if total_cost + line_cost <= budget {
            total_cost += line_cost;
            lines.push(RecommendedLine {
                item: entry.clone(),
                quantity,
                line_cost,
            });
        }
    }

    Recommendation { lines, total_cost }
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

    fn wishlist(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(name, quantity)| (name.to_string(), *quantity))
            .collect()
    }

    #[test]
    fn greedy_pass_accepts_in_metric_order() {
        // Value scores: a = 80, b = 60, c = 90.
        let catalog = vec![
            derived("a", 500.0, 400.0),
            derived("b", 700.0, 420.0),
            derived("c", 400.0, 360.0),
        ];
        let picked = recommend_purchases(
            &catalog,
            &wishlist(&[("a", 1), ("b", 1), ("c", 1)]),
            900.0,
            RecommendMetric::ValueScore,
        );

        let names: Vec<_> = picked.lines.iter().map(|line| line.item.name()).collect();
        assert_eq!(names, ["c", "a"]);
        assert_eq!(picked.total_cost, 900.0);
    }

    #[test]
    fn total_never_exceeds_budget() {
        let catalog = vec![
            derived("a", 300.0, 100.0),
            derived("b", 450.0, 80.0),
            derived("c", 120.0, 30.0),
        ];
        for budget in [0.0, 100.0, 400.0, 500.0, 2_000.0] {
            let picked = recommend_purchases(
                &catalog,
                &wishlist(&[("a", 2), ("b", 1), ("c", 3)]),
                budget,
                RecommendMetric::ShellCost,
            );
            assert!(picked.total_cost <= budget);
        }
    }

    #[test]
    fn oversized_line_is_skipped_whole() {
        // 3 × 200 = 600 > 500: no partial-quantity acceptance.
        let catalog = vec![derived("d", 200.0, 50.0)];
        let picked = recommend_purchases(
            &catalog,
            &wishlist(&[("d", 3)]),
            500.0,
            RecommendMetric::ValueScore,
        );
        assert!(picked.is_empty());
        assert_eq!(picked.total_cost, 0.0);
    }

    #[test]
    fn skipping_a_line_does_not_stop_the_pass() {
        let catalog = vec![
            derived("pricey", 100.0, 90.0), // score 90, line 300
            derived("cheap", 50.0, 30.0),   // score 60, line 50
        ];
        let picked = recommend_purchases(
            &catalog,
            &wishlist(&[("pricey", 3), ("cheap", 1)]),
            120.0,
            RecommendMetric::ValueScore,
        );
        let names: Vec<_> = picked.lines.iter().map(|line| line.item.name()).collect();
        assert_eq!(names, ["cheap"]);
        assert_eq!(picked.total_cost, 50.0);
    }

    #[test]
    fn unknown_names_are_dropped_silently() {
        let catalog = vec![derived("real", 100.0, 50.0)];
        let picked = recommend_purchases(
            &catalog,
            &wishlist(&[("real", 1), ("ghost", 5)]),
            1_000.0,
            RecommendMetric::ValueScore,
        );
        assert_eq!(picked.lines.len(), 1);
        assert_eq!(picked.lines[0].item.name(), "real");
    }

    #[test]
    fn empty_wishlist_yields_empty_result() {
        let catalog = vec![derived("real", 100.0, 50.0)];
        let picked =
            recommend_purchases(&catalog, &BTreeMap::new(), 1_000.0, RecommendMetric::ShellCost);
        assert!(picked.is_empty());
        assert_eq!(picked.total_cost, 0.0);
    }

    #[test]
    fn cheapest_first_orders_by_shell_cost() {
        let catalog = vec![
            derived("mid", 300.0, 10.0),
            derived("low", 100.0, 10.0),
            derived("high", 900.0, 10.0),
        ];
        let picked = recommend_purchases(
            &catalog,
            &wishlist(&[("mid", 1), ("low", 1), ("high", 1)]),
            10_000.0,
            RecommendMetric::ShellCost,
        );
        let names: Vec<_> = picked.lines.iter().map(|line| line.item.name()).collect();
        assert_eq!(names, ["low", "mid", "high"]);
    }
}
