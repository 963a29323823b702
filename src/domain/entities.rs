use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One catalog entry as shipped in the embedded shop data.
///
/// `retail_price` and `resale_price` use `0` as "not applicable" (badges
/// and other shop-only items have no real-world price).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    /// Unique key within the catalog.
    pub name: String,
    pub shell_cost: f64,
    pub retail_price: f64,
    pub resale_price: f64,
    #[serde(default)]
    pub categories: BTreeSet<String>,
    /// Named retailer → URL, passed through untouched.
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ShopItem {
    /// Display label for the category column ("hardware/security").
    pub fn category_label(&self) -> String {
        if self.categories.is_empty() {
            "-".to_string()
        } else {
            self.categories
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join("/")
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

/// A catalog entry plus its derived value metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedItem {
    pub item: ShopItem,
    /// Shells paid per dollar of retail value. `None` when retail is n/a.
    pub shell_to_retail: Option<f64>,
    /// Shells paid per dollar of resale value. `None` when resale is n/a.
    pub shell_to_resale: Option<f64>,
    /// Retail value as a rounded percentage of shell cost; `0` when n/a.
    pub value_score: u32,
}

impl DerivedItem {
    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn value_band(&self) -> ValueBand {
        match self.value_score {
            0 => ValueBand::NotApplicable,
            score if score >= 50 => ValueBand::Great,
            score if score >= 30 => ValueBand::Fair,
            _ => ValueBand::Poor,
        }
    }
}

/// Coarse quality band for a value score, used for color coding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueBand {
    Great,
    Fair,
    Poor,
    NotApplicable,
}

impl ValueBand {
    pub fn label(&self) -> &'static str {
        match self {
            ValueBand::Great => "Great",
            ValueBand::Fair => "Fair",
            ValueBand::Poor => "Poor",
            ValueBand::NotApplicable => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(score: u32) -> DerivedItem {
        DerivedItem {
            item: ShopItem {
                name: "probe".to_string(),
                shell_cost: 100.0,
                retail_price: 0.0,
                resale_price: 0.0,
                categories: BTreeSet::new(),
                links: BTreeMap::new(),
                image: None,
            },
            shell_to_retail: None,
            shell_to_resale: None,
            value_score: score,
        }
    }

    #[test]
    fn value_bands_follow_score_thresholds() {
        assert_eq!(probe(0).value_band(), ValueBand::NotApplicable);
        assert_eq!(probe(1).value_band(), ValueBand::Poor);
        assert_eq!(probe(29).value_band(), ValueBand::Poor);
        assert_eq!(probe(30).value_band(), ValueBand::Fair);
        assert_eq!(probe(49).value_band(), ValueBand::Fair);
        assert_eq!(probe(50).value_band(), ValueBand::Great);
    }

    #[test]
    fn category_label_joins_sorted_names() {
        let mut item = probe(0).item;
        item.categories.insert("security".to_string());
        item.categories.insert("hardware".to_string());
        assert_eq!(item.category_label(), "hardware/security");
    }
}
