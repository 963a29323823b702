use dioxus::prelude::*;

use crate::domain::ValueBand;

/// Pill showing a value score with its quality color band.
#[component]
pub fn ValueBadge(score: u32, band: ValueBand) -> Element {
    let color = match band {
        ValueBand::Great => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ValueBand::Fair => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        ValueBand::Poor => "bg-rose-500/10 text-rose-300 border-rose-500/40",
        ValueBand::NotApplicable => "bg-slate-700/40 text-slate-300 border-slate-600/60",
    };
    let label = match band {
        ValueBand::NotApplicable => band.label().to_string(),
        _ => format!("{score}%"),
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{label}"
        }
    }
}
