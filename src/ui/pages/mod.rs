pub mod catalog;
pub mod rankings;
pub mod settings;
pub mod wishlist;

pub use catalog::CatalogPage;
pub use rankings::RankingsPage;
pub use settings::SettingsPage;
pub use wishlist::WishlistPage;
