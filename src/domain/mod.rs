//! Domain logic for shell-shop budgeting lives here.

pub mod app_state;
pub mod entities;
pub mod filter;
pub mod metrics;
pub mod rankings;
pub mod recommend;
pub mod sort;

#[allow(unused_imports)]
pub use app_state::{AppState, Selection, Theme, DEFAULT_BUDGET};
#[allow(unused_imports)]
pub use entities::{DerivedItem, ShopItem, ValueBand};
#[allow(unused_imports)]
pub use filter::{visible_items, CategoryMode, StatusFilter};
#[allow(unused_imports)]
pub use metrics::{derive_catalog, derive_item};
#[allow(unused_imports)]
pub use rankings::{best_value, worst_value, RANKING_SIZE};
#[allow(unused_imports)]
pub use recommend::{recommend_purchases, Recommendation, RecommendMetric, RecommendedLine};
#[allow(unused_imports)]
pub use sort::{compare_values, sort_items, sort_value, SortDirection, SortKey, SortValue};
