use dioxus::prelude::*;

use crate::{
    app::persist_wishlist,
    domain::{AppState, CategoryMode, SortKey, StatusFilter, Theme},
    ui::{
        components::{
            catalog_table::{price_display, ratio_display, CatalogRow, CatalogTable},
            kpi_card::KpiCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CatalogPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let active_theme = state.with(|st| st.theme);
    let selection = state.with(|st| st.selection.clone());
    let categories = state.with(|st| st.categories());
    let visible = state.with(|st| st.visible_sorted());

    let mut budget_input = use_signal(|| format!("{:.0}", selection.budget));

    let in_budget_count = state.with(|st| {
        st.catalog
            .iter()
            .filter(|entry| entry.item.shell_cost <= st.selection.budget)
            .count()
    });
    let excluded_count = selection.excluded.len();
    let wishlist_count = selection.wishlist.len();

    let rows: Vec<CatalogRow> = visible
        .iter()
        .map(|entry| CatalogRow {
            name: entry.item.name.clone(),
            category_label: entry.item.category_label(),
            shell_cost: entry.item.shell_cost,
            retail_display: price_display(entry.item.retail_price),
            resale_display: price_display(entry.item.resale_price),
            shell_to_retail_display: ratio_display(entry.shell_to_retail),
            shell_to_resale_display: ratio_display(entry.shell_to_resale),
            value_score: entry.value_score,
            value_band: entry.value_band(),
            excluded: selection.is_excluded(entry.name()),
            wishlist_quantity: selection.quantity_of(entry.name()),
            link: entry.item.links.values().next().cloned(),
        })
        .collect();

    let on_budget_input = {
        let mut state = state.clone();
        move |evt: FormEvent| {
            let raw = evt.value();
            budget_input.set(raw.clone());
            if let Ok(value) = raw.trim().parse::<f64>() {
                state.with_mut(|st| st.selection.budget = value);
            }
        }
    };

    let on_sort = {
        let mut state = state.clone();
        move |key: SortKey| {
            state.with_mut(|st| st.selection.request_sort(key));
        }
    };

    let on_toggle_exclude = {
        let mut state = state.clone();
        move |name: String| {
            state.with_mut(|st| st.selection.toggle_excluded(&name));
        }
    };

    let on_add_wish = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |name: String| {
            state.with_mut(|st| st.selection.add_to_wishlist(&name));
            persist_wishlist(&state);
            let quantity = state.with(|st| st.selection.quantity_of(&name));
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("{name} on the wishlist (x{quantity})."),
            );
        }
    };

    let on_toggle_category = {
        let mut state = state.clone();
        move |category: String| {
            state.with_mut(|st| st.selection.toggle_category(&category));
        }
    };

    let on_category_mode = {
        let mut state = state.clone();
        move |mode: CategoryMode| {
            state.with_mut(|st| st.selection.category_mode = mode);
        }
    };

    let on_status = {
        let mut state = state.clone();
        move |status: StatusFilter| {
            state.with_mut(|st| st.selection.status_filter = status);
        }
    };

    let on_toggle_show_excluded = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|st| st.selection.show_excluded = !st.selection.show_excluded);
        }
    };

    let show_excluded_label = if selection.show_excluded {
        "Show Available Items"
    } else {
        "Show Excluded Items"
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border(active_theme)} p-6 space-y-4",
                div { class: "flex flex-wrap items-end gap-4",
                    div { class: "flex-1 min-w-[200px]",
                        label { class: "{theme::label_class(active_theme)}", "Your Shell Budget" }
                        input {
                            class: "mt-1 w-full {theme::input_class(active_theme)} text-xl font-bold",
                            inputmode: "decimal",
                            value: budget_input(),
                            oninput: on_budget_input,
                            placeholder: "Enter your shell budget",
                        }
                    }
                    KpiCard {
                        title: "Items in Budget".to_string(),
                        value: in_budget_count.to_string(),
                        theme: active_theme,
                    }
                    KpiCard {
                        title: "Excluded".to_string(),
                        value: excluded_count.to_string(),
                        theme: active_theme,
                    }
                    KpiCard {
                        title: "Wishlist Lines".to_string(),
                        value: wishlist_count.to_string(),
                        theme: active_theme,
                    }
                }
                if excluded_count > 0 || selection.show_excluded {
                    button {
                        class: "rounded-lg border border-amber-400/40 bg-amber-500/20 px-4 py-2 text-sm text-amber-200 hover:bg-amber-500/30 transition-colors",
                        onclick: on_toggle_show_excluded,
                        "{show_excluded_label}"
                    }
                }
            }

            section {
                class: "{theme::panel_solid(active_theme)} p-4 space-y-3",
                div { class: "flex flex-wrap items-center gap-2",
                    span { class: "{theme::label_class(active_theme)}", "Categories" }
                    for category in categories {
                        FilterChip {
                            label: category.clone(),
                            value: category.clone(),
                            active: selection.selected_categories.contains(&category),
                            theme: active_theme,
                            on_toggle: on_toggle_category.clone(),
                        }
                    }
                    span { class: "mx-2 {theme::text_muted(active_theme)}", "·" }
                    ModeButton {
                        mode: CategoryMode::Include,
                        active: selection.category_mode == CategoryMode::Include,
                        theme: active_theme,
                        on_select: on_category_mode.clone(),
                    }
                    ModeButton {
                        mode: CategoryMode::Exclude,
                        active: selection.category_mode == CategoryMode::Exclude,
                        theme: active_theme,
                        on_select: on_category_mode.clone(),
                    }
                }
                div { class: "flex flex-wrap items-center gap-2",
                    span { class: "{theme::label_class(active_theme)}", "Status" }
                    for status in StatusFilter::ALL {
                        StatusChip {
                            status,
                            active: selection.status_filter == status,
                            theme: active_theme,
                            on_select: on_status.clone(),
                        }
                    }
                }
            }

            CatalogTable {
                rows,
                theme: active_theme,
                sort_key: selection.sort_key,
                sort_direction: selection.sort_direction,
                on_sort,
                on_toggle_exclude,
                on_add_wish,
            }

            section {
                class: "rounded-xl border border-sky-400/30 bg-sky-500/20 p-6",
                h3 { class: "text-lg font-semibold text-sky-300", "📊 How to Use This Tool" }
                ul { class: "mt-3 space-y-2 text-sm text-sky-100",
                    li { strong { "Budget: " } "enter your shell count to filter items within reach." }
                    li { strong { "Exclude: " } "drop items you are not interested in; rankings update with you." }
                    li { strong { "Shell:Retail: " } "lower is better, fewer shells per dollar of retail value." }
                    li { strong { "Value %: " } "higher is better, retail value as a share of shell cost." }
                    li { strong { "Colors: " } "green 50%+ great value, amber 30-49% fair, red below 30%." }
                }
            }
        }
    }
}

#[component]
fn FilterChip(
    label: String,
    value: String,
    active: bool,
    theme: Theme,
    on_toggle: EventHandler<String>,
) -> Element {
    let class = if active {
        theme::btn_small_active(theme)
    } else {
        theme::btn_small_inactive(theme)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_toggle.call(value.clone()),
            "{label}"
        }
    }
}

#[component]
fn ModeButton(
    mode: CategoryMode,
    active: bool,
    theme: Theme,
    on_select: EventHandler<CategoryMode>,
) -> Element {
    let class = if active {
        theme::btn_small_active(theme)
    } else {
        theme::btn_small_inactive(theme)
    };
    let label = mode.label();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(mode),
            "{label}"
        }
    }
}

#[component]
fn StatusChip(
    status: StatusFilter,
    active: bool,
    theme: Theme,
    on_select: EventHandler<StatusFilter>,
) -> Element {
    let class = if active {
        theme::btn_small_active(theme)
    } else {
        theme::btn_small_inactive(theme)
    };
    let label = status.label();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(status),
            "{label}"
        }
    }
}
