use dioxus::prelude::*;

/// Visual flavor for a ranking panel: praise or warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankingTone {
    Best,
    Worst,
}

impl RankingTone {
    fn panel_class(&self) -> &'static str {
        match self {
            RankingTone::Best => "rounded-xl border border-emerald-500/30 bg-emerald-500/10 p-6",
            RankingTone::Worst => "rounded-xl border border-rose-500/30 bg-rose-500/10 p-6",
        }
    }

    fn title_class(&self) -> &'static str {
        match self {
            RankingTone::Best => "text-lg font-semibold text-emerald-300",
            RankingTone::Worst => "text-lg font-semibold text-rose-300",
        }
    }

    fn score_class(&self) -> &'static str {
        match self {
            RankingTone::Best => "font-bold text-emerald-300",
            RankingTone::Worst => "font-bold text-rose-300",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct RankingEntry {
    pub name: String,
    pub value_score: u32,
    pub shell_cost: f64,
    pub retail_price: f64,
}

#[component]
pub fn RankingPanel(title: String, tone: RankingTone, entries: Vec<RankingEntry>) -> Element {
    let is_empty = entries.is_empty();

    rsx! {
        div {
            class: "{tone.panel_class()}",
            h2 { class: "{tone.title_class()}", "{title}" }
            div {
                class: "mt-4 space-y-2",
                for entry in entries {
                    div {
                        class: "rounded-lg bg-slate-950/40 p-3",
                        div {
                            class: "flex items-center justify-between",
                            span { class: "font-medium text-slate-100", "{entry.name}" }
                            span { class: "{tone.score_class()}", {format!("{}%", entry.value_score)} }
                        }
                        div {
                            class: "text-sm text-slate-400",
                            {format!("{:.0} shells → ${:.2} retail", entry.shell_cost, entry.retail_price)}
                        }
                    }
                }
                if is_empty {
                    p { class: "text-sm text-slate-400", "No priced items match the current filters." }
                }
            }
        }
    }
}
