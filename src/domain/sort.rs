//! Stable catalog sorting over a closed set of sort keys.
//!
//! Every key extracts a typed [`SortValue`] instead of poking at fields by
//! name. Ordering rules: two numbers compare numerically, two texts
//! lexicographically, numbers order before texts, and `NotApplicable`
//! compares greater than everything else — n/a rows land last when
//! ascending and first when descending.

use std::cmp::Ordering;

use super::entities::DerivedItem;

/// Sortable columns of the catalog table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    #[default]
    ShellCost,
    RetailPrice,
    ResalePrice,
    ShellToRetail,
    ShellToResale,
    ValueScore,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Item",
            Self::Category => "Category",
            Self::ShellCost => "Shells",
            Self::RetailPrice => "Retail $",
            Self::ResalePrice => "Resale $",
            Self::ShellToRetail => "Shell:Retail",
            Self::ShellToResale => "Shell:Resale",
            Self::ValueScore => "Value %",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Typed sort operand extracted from a [`DerivedItem`].
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    NotApplicable,
}

/// Accessor table: one extraction per sort key.
pub fn sort_value(item: &DerivedItem, key: SortKey) -> SortValue {
    match key {
        SortKey::Name => SortValue::Text(item.item.name.clone()),
        SortKey::Category => SortValue::Text(item.item.category_label()),
        SortKey::ShellCost => SortValue::Number(item.item.shell_cost),
        SortKey::RetailPrice => optional_number(item.item.retail_price),
        SortKey::ResalePrice => optional_number(item.item.resale_price),
        SortKey::ShellToRetail => ratio_value(item.shell_to_retail),
        SortKey::ShellToResale => ratio_value(item.shell_to_resale),
        SortKey::ValueScore => SortValue::Number(item.value_score as f64),
    }
}

fn optional_number(price: f64) -> SortValue {
    if price > 0.0 {
        SortValue::Number(price)
    } else {
        SortValue::NotApplicable
    }
}

fn ratio_value(ratio: Option<f64>) -> SortValue {
    ratio.map(SortValue::Number).unwrap_or(SortValue::NotApplicable)
}

/// Total order over sort values; see the module docs for the n/a rule.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    use SortValue::*;

    match (a, b) {
        (Number(x), Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Text(x), Text(y)) => x.cmp(y),
        (NotApplicable, NotApplicable) => Ordering::Equal,
        (NotApplicable, _) => Ordering::Greater,
        (_, NotApplicable) => Ordering::Less,
        (Number(_), Text(_)) => Ordering::Less,
        (Text(_), Number(_)) => Ordering::Greater,
    }
}

/// Sort in place. `sort_by` is stable, so ties keep their incoming
/// (catalog) order.
pub fn sort_items(items: &mut [DerivedItem], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = compare_values(&sort_value(a, key), &sort_value(b, key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
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

    #[test]
    fn numeric_keys_sort_numerically() {
        let mut items = vec![
            derived("b", 200.0, 10.0),
            derived("a", 50.0, 10.0),
            derived("c", 125.0, 10.0),
        ];
        sort_items(&mut items, SortKey::ShellCost, SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["a", "c", "b"]);
    }

    #[test]
    fn not_applicable_sorts_last_ascending() {
        let mut items = vec![
            derived("badge", 100.0, 0.0),
            derived("tool", 100.0, 20.0),
            derived("kit", 100.0, 40.0),
        ];
        sort_items(&mut items, SortKey::ShellToRetail, SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["kit", "tool", "badge"]);
    }

    #[test]
    fn not_applicable_sorts_first_descending() {
        let mut items = vec![
            derived("tool", 100.0, 20.0),
            derived("badge", 100.0, 0.0),
        ];
        sort_items(&mut items, SortKey::RetailPrice, SortDirection::Descending);
        assert_eq!(items[0].name(), "badge");
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut items = vec![
            derived("b", 200.0, 10.0),
            derived("a", 50.0, 0.0),
            derived("c", 125.0, 30.0),
            derived("d", 125.0, 5.0),
        ];
        sort_items(&mut items, SortKey::ValueScore, SortDirection::Descending);
        let once = items.clone();
        sort_items(&mut items, SortKey::ValueScore, SortDirection::Descending);
        assert_eq!(items, once);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut items = vec![
            derived("first", 100.0, 10.0),
            derived("second", 100.0, 10.0),
            derived("third", 100.0, 10.0),
        ];
        sort_items(&mut items, SortKey::ShellCost, SortDirection::Ascending);
        let names: Vec<_> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn text_keys_sort_lexicographically() {
        let mut items = vec![
            derived("zephyr", 10.0, 1.0),
            derived("anchor", 10.0, 1.0),
        ];
        sort_items(&mut items, SortKey::Name, SortDirection::Ascending);
        assert_eq!(items[0].name(), "anchor");
    }
}
