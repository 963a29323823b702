//! The static shop catalog, embedded at build time and parsed once.

use std::sync::OnceLock;

use thiserror::Error;

use crate::domain::ShopItem;
use crate::util::assets;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog document into shop items. Split out from the embedded
/// loader so malformed input stays testable.
pub fn parse_catalog(json: &str) -> Result<Vec<ShopItem>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// The embedded catalog. Loaded lazily, then shared for the lifetime of
/// the process — the shop data never changes while the app runs.
///
/// The JSON ships inside the binary, so failing to parse it is a build
/// defect, not a runtime condition; it panics the same way a missing
/// embedded asset does.
pub fn shop_catalog() -> &'static [ShopItem] {
    static CATALOG: OnceLock<Vec<ShopItem>> = OnceLock::new();
    CATALOG
        .get_or_init(|| {
            let items = parse_catalog(assets::catalog_json())
                .unwrap_or_else(|err| panic!("Embedded catalog is invalid: {err}"));
            println!("[catalog] Loaded {} shop items", items.len());
            items
        })
        .as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_parses() {
        let items = parse_catalog(assets::catalog_json()).unwrap();
        assert!(items.len() > 80);
    }

    #[test]
    fn names_are_unique_and_costs_positive() {
        let items = shop_catalog();
        let mut seen = HashSet::new();
        for item in items {
            assert!(seen.insert(item.name.as_str()), "duplicate: {}", item.name);
            assert!(item.shell_cost > 0.0, "non-positive cost: {}", item.name);
            assert!(item.retail_price >= 0.0);
            assert!(item.resale_price >= 0.0);
        }
    }

    #[test]
    fn badges_carry_no_retail_price() {
        let items = shop_catalog();
        let badges: Vec<_> = items
            .iter()
            .filter(|item| item.has_category("badge"))
            .collect();
        assert!(!badges.is_empty());
        assert!(badges.iter().all(|item| item.retail_price == 0.0));
    }

    #[test]
    fn malformed_documents_error_instead_of_panicking() {
        assert!(parse_catalog("[{\"name\": }]").is_err());
        assert!(parse_catalog("not json").is_err());
    }
}
