use dioxus::prelude::*;

use crate::{
    domain::{best_value, visible_items, worst_value, AppState, DerivedItem, RANKING_SIZE},
    ui::{
        components::ranking_panel::{RankingEntry, RankingPanel, RankingTone},
        theme,
    },
};

#[component]
pub fn RankingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let active_theme = state.with(|st| st.theme);
    let visible = state.with(|st| visible_items(&st.catalog, &st.selection));
    let budget = state.with(|st| st.selection.budget);

    let best = to_entries(&best_value(&visible));
    let worst = to_entries(&worst_value(&visible));
    let priced_count = visible
        .iter()
        .filter(|entry| entry.item.retail_price > 0.0)
        .count();

    rsx! {
        div { class: "space-y-6",
            header {
                div {
                    h1 { class: "text-2xl font-semibold text-slate-100", "Value Rankings" }
                    p {
                        class: "text-sm {theme::text_muted(active_theme)}",
                        {format!(
                            "Top {RANKING_SIZE} each way across {priced_count} priced items inside your {budget:.0}-shell budget and filters."
                        )}
                    }
                }
            }

            div { class: "grid gap-6 md:grid-cols-2",
                RankingPanel {
                    title: "🏆 Best Value Items".to_string(),
                    tone: RankingTone::Best,
                    entries: best,
                }
                RankingPanel {
                    title: "⚠️ Worst Value Items".to_string(),
                    tone: RankingTone::Worst,
                    entries: worst,
                }
            }

            p {
                class: "text-xs {theme::text_muted(active_theme)}",
                "Badges and other items without a retail price never rank; they have no value score to compare."
            }
        }
    }
}

fn to_entries(items: &[DerivedItem]) -> Vec<RankingEntry> {
    items
        .iter()
        .map(|entry| RankingEntry {
            name: entry.item.name.clone(),
            value_score: entry.value_score,
            shell_cost: entry.item.shell_cost,
            retail_price: entry.item.retail_price,
        })
        .collect()
}
