use dioxus::prelude::*;

use crate::{
    app::persist_wishlist,
    domain::{recommend_purchases, AppState, DerivedItem, RecommendMetric, Theme},
    ui::{
        components::{
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn WishlistPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let active_theme = state.with(|st| st.theme);
    let budget = state.with(|st| st.selection.budget);
    let metric = state.with(|st| st.selection.recommend_metric);

    // Wishlist lines resolved against the catalog, in catalog order.
    let lines: Vec<(DerivedItem, u32)> = state.with(|st| {
        st.catalog
            .iter()
            .filter_map(|entry| {
                st.selection
                    .wishlist
                    .get(entry.name())
                    .copied()
                    .map(|quantity| (entry.clone(), quantity))
            })
            .collect()
    });

    if lines.is_empty() {
        return rsx! {
            div {
                class: "{theme::panel_solid(active_theme)} p-6 text-sm {theme::text_muted(active_theme)}",
                "Your wishlist is empty. Add items from the catalog to plan a haul."
            }
        };
    }

    let planned_spend: f64 = lines
        .iter()
        .map(|(entry, quantity)| entry.item.shell_cost * *quantity as f64)
        .sum();

    let picked = state.with(|st| {
        recommend_purchases(&st.catalog, &st.selection.wishlist, budget, metric)
    });
    let leftover = budget - picked.total_cost;
    let skipped_count = lines.len() - picked.lines.len();

    let on_set_quantity = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |(name, quantity): (String, i64)| {
            state.with_mut(|st| st.selection.set_quantity(&name, quantity));
            persist_wishlist(&state);
            if quantity <= 0 {
                push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    format!("{name} removed from the wishlist."),
                );
            }
        }
    };

    let on_remove = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |name: String| {
            state.with_mut(|st| st.selection.set_quantity(&name, 0));
            persist_wishlist(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                format!("{name} removed from the wishlist."),
            );
        }
    };

    let on_metric = {
        let mut state = state.clone();
        move |choice: RecommendMetric| {
            state.with_mut(|st| st.selection.recommend_metric = choice);
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Planned Spend".to_string(),
                    value: format!("{planned_spend:.0}"),
                    description: Some("Shells for every wishlist line".to_string()),
                    theme: active_theme,
                }
                KpiCard {
                    title: "Budget".to_string(),
                    value: format!("{budget:.0}"),
                    description: Some("Set on the catalog page".to_string()),
                    theme: active_theme,
                }
                KpiCard {
                    title: "Left After Picks".to_string(),
                    value: format!("{leftover:.0}"),
                    description: Some("Budget minus recommended lines".to_string()),
                    theme: active_theme,
                }
            }

            section {
                class: "space-y-4",
                h2 { class: "text-sm font-semibold text-slate-200", "Wishlist" }
                div {
                    class: "{theme::table_container(active_theme)}",
                    table {
                        class: "min-w-full {theme::table_divider(active_theme)} text-sm",
                        thead {
                            class: "{theme::table_header(active_theme)} text-left tracking-wide",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Item" }
                                th { class: "px-4 py-3 font-medium text-right", "Shells" }
                                th { class: "px-4 py-3 font-medium text-center", "Qty" }
                                th { class: "px-4 py-3 font-medium text-right", "Line Cost" }
                                th { class: "px-4 py-3" }
                            }
                        }
                        tbody {
                            class: "{theme::table_divider(active_theme)}",
                            for (entry, quantity) in lines {
                                WishRow {
                                    name: entry.item.name.clone(),
                                    shell_cost: entry.item.shell_cost,
                                    quantity,
                                    theme: active_theme,
                                    on_set_quantity: on_set_quantity.clone(),
                                    on_remove: on_remove.clone(),
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "space-y-4",
                div { class: "flex flex-wrap items-center justify-between gap-3",
                    h2 { class: "text-sm font-semibold text-slate-200", "Recommended Haul" }
                    div { class: "flex gap-2",
                        for choice in RecommendMetric::ALL {
                            MetricButton {
                                choice,
                                active: metric == choice,
                                theme: active_theme,
                                on_select: on_metric.clone(),
                            }
                        }
                    }
                }

                if picked.is_empty() {
                    div {
                        class: "{theme::panel_solid(active_theme)} p-6 text-sm {theme::text_muted(active_theme)}",
                        "Nothing fits the budget as whole lines. Trim quantities or raise the budget."
                    }
                } else {
                    div {
                        class: "{theme::panel_border(active_theme)} p-4 space-y-2",
                        for (index, line) in picked.lines.iter().enumerate() {
                            div {
                                class: "flex items-center justify-between rounded-lg bg-slate-950/40 px-3 py-2",
                                span {
                                    class: "text-sm {theme::text_secondary(active_theme)}",
                                    {format!("{}. {} ×{}", index + 1, line.item.item.name, line.quantity)}
                                }
                                span {
                                    class: "text-sm font-semibold {theme::accent_text(active_theme)}",
                                    {format!("{:.0} shells", line.line_cost)}
                                }
                            }
                        }
                        div {
                            class: "mt-2 flex items-center justify-between border-t border-slate-800 px-3 pt-3",
                            span { class: "text-sm font-semibold text-slate-200", "Total" }
                            span {
                                class: "text-sm font-bold {theme::accent_text(active_theme)}",
                                {format!("{:.0} / {budget:.0} shells", picked.total_cost)}
                            }
                        }
                        if skipped_count > 0 {
                            p {
                                class: "px-3 text-xs {theme::text_muted(active_theme)}",
                                {format!("{skipped_count} line(s) did not fit whole and were skipped.")}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WishRow(
    name: String,
    shell_cost: f64,
    quantity: u32,
    theme: Theme,
    on_set_quantity: EventHandler<(String, i64)>,
    on_remove: EventHandler<String>,
) -> Element {
    let line_cost = shell_cost * quantity as f64;
    let input_name = name.clone();
    let remove_name = name.clone();

    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-medium {theme::text_secondary(theme)}", "{name}" }
            td { class: "px-4 py-3 text-right {theme::accent_text(theme)}", {format!("{shell_cost:.0}")} }
            td {
                class: "px-4 py-3 text-center",
                input {
                    class: "w-16 text-center {theme::input_small(theme)}",
                    inputmode: "numeric",
                    value: "{quantity}",
                    oninput: move |evt| {
                        if let Ok(parsed) = evt.value().trim().parse::<i64>() {
                            on_set_quantity.call((input_name.clone(), parsed));
                        }
                    },
                }
            }
            td { class: "px-4 py-3 text-right {theme::text_secondary(theme)}", {format!("{line_cost:.0}")} }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: "rounded-md border border-rose-500/40 px-2 py-1 text-[10px] font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                    onclick: move |_| on_remove.call(remove_name.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn MetricButton(
    choice: RecommendMetric,
    active: bool,
    theme: Theme,
    on_select: EventHandler<RecommendMetric>,
) -> Element {
    let class = if active {
        theme::btn_small_active(theme)
    } else {
        theme::btn_small_inactive(theme)
    };
    let label = choice.label();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(choice),
            "{label}"
        }
    }
}
