//! Theme-specific class helpers for consistent styling across pages.

use crate::domain::Theme;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded-lg bg-cyan-500 px-4 py-2 text-sm font-semibold text-white hover:bg-cyan-400",
        Theme::Abyss => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400",
        Theme::Tidepool => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
    }
}

pub fn btn_small_active(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded px-2 py-1 text-xs font-semibold bg-cyan-500/20 text-cyan-300 border border-cyan-500/40",
        Theme::Abyss => "rounded px-2 py-1 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40",
        Theme::Tidepool => "rounded px-2 py-1 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40",
    }
}

pub fn btn_small_inactive(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-cyan-600 hover:text-cyan-300",
        Theme::Abyss => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-indigo-600 hover:text-indigo-300",
        Theme::Tidepool => "rounded px-2 py-1 text-xs text-slate-500 border border-slate-700 hover:border-emerald-600 hover:text-emerald-300",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-cyan-500 focus:outline-none",
        Theme::Abyss => "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
        Theme::Tidepool => "rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
    }
}

pub fn input_small(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-cyan-500 focus:outline-none",
        Theme::Abyss => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
        Theme::Tidepool => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel_border(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded-xl border border-cyan-900/50 bg-slate-900/40",
        Theme::Abyss => "rounded-xl border border-indigo-900/50 bg-slate-900/40",
        Theme::Tidepool => "rounded-xl border border-emerald-900/50 bg-slate-900/40",
    }
}

pub fn panel_solid(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded-xl border border-slate-800 bg-slate-900/40",
        Theme::Abyss => "rounded-xl border border-slate-800 bg-slate-900/40",
        Theme::Tidepool => "rounded-xl border border-slate-800 bg-slate-900/40",
    }
}

// ============================================
// TABLE STYLES
// ============================================

pub fn table_container(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "rounded-xl border border-cyan-900/40 bg-slate-900/40 overflow-hidden",
        Theme::Abyss => "rounded-xl border border-indigo-900/40 bg-slate-900/40 overflow-hidden",
        Theme::Tidepool => "rounded-xl border border-emerald-900/40 bg-slate-900/40 overflow-hidden",
    }
}

pub fn table_header(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "border-b border-cyan-900/40 bg-cyan-950/30 text-xs uppercase text-cyan-400/70",
        Theme::Abyss => "border-b border-indigo-900/40 bg-indigo-950/30 text-xs uppercase text-indigo-400/70",
        Theme::Tidepool => "border-b border-emerald-900/40 bg-emerald-950/30 text-xs uppercase text-emerald-400/70",
    }
}

pub fn table_divider(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "divide-y divide-cyan-900/30",
        Theme::Abyss => "divide-y divide-indigo-900/30",
        Theme::Tidepool => "divide-y divide-emerald-900/30",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_secondary(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon | Theme::Abyss | Theme::Tidepool => "text-slate-300",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon | Theme::Abyss | Theme::Tidepool => "text-slate-500",
    }
}

pub fn label_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon | Theme::Abyss | Theme::Tidepool => {
            "block text-xs font-semibold uppercase text-slate-500"
        }
    }
}

pub fn accent_text(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "text-cyan-400",
        Theme::Abyss => "text-indigo-400",
        Theme::Tidepool => "text-emerald-400",
    }
}

pub fn link_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "text-xs font-semibold uppercase tracking-wide text-cyan-300 hover:text-cyan-100",
        Theme::Abyss => "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
        Theme::Tidepool => "text-xs font-semibold uppercase tracking-wide text-emerald-300 hover:text-emerald-100",
    }
}

// ============================================
// SHELL / HEADER STYLES
// ============================================

pub fn header_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "border-b border-cyan-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Theme::Abyss => "border-b border-indigo-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
        Theme::Tidepool => "border-b border-emerald-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
    }
}

pub fn title_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Lagoon => "text-xl font-semibold tracking-tight text-cyan-200",
        Theme::Abyss => "text-xl font-semibold tracking-tight text-indigo-200",
        Theme::Tidepool => "text-xl font-semibold tracking-tight text-emerald-200",
    }
}
