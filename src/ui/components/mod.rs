pub mod catalog_table;
pub mod kpi_card;
pub mod ranking_panel;
pub mod toast;
pub mod value_badge;
