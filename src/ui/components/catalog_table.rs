use dioxus::prelude::*;

use super::value_badge::ValueBadge;
use crate::domain::{SortDirection, SortKey, Theme, ValueBand};
use crate::ui::theme;

/// One rendered catalog line with its display-ready fields.
#[derive(Clone, PartialEq)]
pub struct CatalogRow {
    pub name: String,
    pub category_label: String,
    pub shell_cost: f64,
    pub retail_display: String,
    pub resale_display: String,
    pub shell_to_retail_display: String,
    pub shell_to_resale_display: String,
    pub value_score: u32,
    pub value_band: ValueBand,
    pub excluded: bool,
    pub wishlist_quantity: u32,
    /// First retailer link, if the catalog carries one. Opaque URL.
    pub link: Option<String>,
}

/// Columns shown in the table, in order; each one sorts on click.
const COLUMNS: [(SortKey, bool); 8] = [
    (SortKey::Name, false),
    (SortKey::Category, false),
    (SortKey::ShellCost, true),
    (SortKey::RetailPrice, true),
    (SortKey::ResalePrice, true),
    (SortKey::ShellToRetail, true),
    (SortKey::ShellToResale, true),
    (SortKey::ValueScore, true),
];

#[component]
pub fn CatalogTable(
    rows: Vec<CatalogRow>,
    theme: Theme,
    sort_key: SortKey,
    sort_direction: SortDirection,
    on_sort: EventHandler<SortKey>,
    on_toggle_exclude: EventHandler<String>,
    on_add_wish: EventHandler<String>,
) -> Element {
    let is_empty = rows.is_empty();

    rsx! {
        div {
            class: "{theme::table_container(theme)}",
            table {
                class: "min-w-full {theme::table_divider(theme)} text-sm",
                thead {
                    class: "{theme::table_header(theme)} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Action" }
                        for (key, numeric) in COLUMNS {
                            SortableHeader {
                                key_: key,
                                numeric,
                                active: sort_key == key,
                                direction: sort_direction,
                                on_sort: on_sort.clone(),
                            }
                        }
                        th { class: "px-4 py-3 font-medium text-center", "Wish" }
                    }
                }
                tbody {
                    class: "{theme::table_divider(theme)}",
                    for row in rows {
                        CatalogRowView {
                            row,
                            theme,
                            on_toggle_exclude: on_toggle_exclude.clone(),
                            on_add_wish: on_add_wish.clone(),
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::text_muted(theme)}",
                                colspan: "10",
                                "Nothing to show — raise the budget or relax the filters."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortableHeader(
    key_: SortKey,
    numeric: bool,
    active: bool,
    direction: SortDirection,
    on_sort: EventHandler<SortKey>,
) -> Element {
    let align = if numeric { "text-right" } else { "text-left" };
    let arrow = if active { direction.arrow() } else { "↕" };
    let label = key_.label();

    rsx! {
        th {
            class: "px-4 py-3 font-medium {align} cursor-pointer select-none hover:text-slate-200",
            onclick: move |_| on_sort.call(key_),
            span { class: "inline-flex items-center gap-1",
                "{label}"
                span { class: "text-[10px] opacity-70", "{arrow}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CatalogRowViewProps {
    row: CatalogRow,
    theme: Theme,
    on_toggle_exclude: EventHandler<String>,
    on_add_wish: EventHandler<String>,
}

#[component]
fn CatalogRowView(props: CatalogRowViewProps) -> Element {
    let row = props.row;
    let theme = props.theme;
    let row_class = if row.excluded {
        "opacity-50 transition-colors hover:bg-slate-800/40"
    } else {
        "transition-colors hover:bg-slate-800/40"
    };
    let exclude_class = if row.excluded {
        "rounded-md border border-emerald-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-emerald-200 hover:bg-emerald-500/10"
    } else {
        "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10"
    };
    let exclude_label = if row.excluded { "Include" } else { "Exclude" };
    let wish_label = if row.wishlist_quantity > 0 {
        format!("+1 ({})", row.wishlist_quantity)
    } else {
        "+1".to_string()
    };
    let exclude_name = row.name.clone();
    let wish_name = row.name.clone();

    rsx! {
        tr {
            class: row_class,
            td {
                class: "px-4 py-3",
                button {
                    class: exclude_class,
                    onclick: move |_| props.on_toggle_exclude.call(exclude_name.clone()),
                    "{exclude_label}"
                }
            }
            td {
                class: "px-4 py-3 font-medium {theme::text_secondary(theme)}",
                if let Some(link) = row.link.clone() {
                    a {
                        href: link,
                        target: "_blank",
                        rel: "noreferrer",
                        class: "hover:underline",
                        "{row.name}"
                    }
                } else {
                    "{row.name}"
                }
            }
            td { class: "px-4 py-3 text-xs uppercase {theme::text_muted(theme)}", "{row.category_label}" }
            td { class: "px-4 py-3 text-right {theme::accent_text(theme)}", {format!("{:.0}", row.shell_cost)} }
            td { class: "px-4 py-3 text-right {theme::text_secondary(theme)}", "{row.retail_display}" }
            td { class: "px-4 py-3 text-right {theme::text_secondary(theme)}", "{row.resale_display}" }
            td { class: "px-4 py-3 text-right font-mono text-sm {theme::text_secondary(theme)}", "{row.shell_to_retail_display}" }
            td { class: "px-4 py-3 text-right font-mono text-sm {theme::text_secondary(theme)}", "{row.shell_to_resale_display}" }
            td {
                class: "px-4 py-3 text-right",
                ValueBadge { score: row.value_score, band: row.value_band }
            }
            td {
                class: "px-4 py-3 text-center",
                button {
                    class: "{theme::btn_small_inactive(theme)}",
                    onclick: move |_| props.on_add_wish.call(wish_name.clone()),
                    "{wish_label}"
                }
            }
        }
    }
}

/// "$3.99" for priced fields, "N/A" for the zero sentinel.
pub fn price_display(price: f64) -> String {
    if price > 0.0 {
        format!("${price:.2}")
    } else {
        "N/A".to_string()
    }
}

/// Two-decimal ratio, or "N/A" when the item has no comparison price.
pub fn ratio_display(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{value:.2}"),
        None => "N/A".to_string(),
    }
}
