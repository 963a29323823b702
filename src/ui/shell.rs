use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, Theme};
use crate::ui::theme;
use crate::util::version::APP_NAME;

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let active_theme = state.with(|s| s.theme);

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "{theme::header_class(active_theme)}",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    // Left: app name + tagline
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🐚" }
                        div {
                            h1 { class: "{theme::title_class(active_theme)}", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "spend your shells where they count" }
                        }
                    }

                    // Center: theme switcher
                    div { class: "flex gap-1 justify-center",
                        for option in Theme::ALL {
                            ThemeButton {
                                option,
                                active: option == active_theme,
                                onclick: move |_| state_mut.with_mut(|s| s.theme = option),
                            }
                        }
                    }

                    // Right: navigation
                    nav { class: "flex gap-2 text-sm justify-end",
                        NavButton {
                            active: matches!(current_route, Route::Catalog {}),
                            onclick: move |_| { nav.push(Route::Catalog {}); },
                            label: "🐚 Catalog",
                            theme: active_theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Rankings {}),
                            onclick: move |_| { nav.push(Route::Rankings {}); },
                            label: "🏆 Rankings",
                            theme: active_theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Wishlist {}),
                            onclick: move |_| { nav.push(Route::Wishlist {}); },
                            label: "📝 Wishlist",
                            theme: active_theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                            theme: active_theme,
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
        }
    }
}

#[component]
fn ThemeButton(option: Theme, active: bool, onclick: EventHandler<()>) -> Element {
    let class = if active {
        theme::btn_small_active(option)
    } else {
        theme::btn_small_inactive(option)
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{option.name()}"
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: &'static str,
    theme: Theme,
) -> Element {
    let class = match (theme, active) {
        (Theme::Lagoon, true) => {
            "min-w-[5.5rem] rounded-lg border border-cyan-500/60 bg-cyan-500/15 px-4 py-2 font-semibold text-cyan-300 lagoon-glow"
        }
        (Theme::Lagoon, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-cyan-700 hover:bg-cyan-900/20 hover:text-cyan-300"
        }
        (Theme::Abyss, true) => {
            "min-w-[5.5rem] rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300 abyss-glow"
        }
        (Theme::Abyss, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-indigo-700 hover:bg-indigo-900/20 hover:text-indigo-300"
        }
        (Theme::Tidepool, true) => {
            "min-w-[5.5rem] rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-4 py-2 font-semibold text-emerald-300 tidepool-glow"
        }
        (Theme::Tidepool, false) => {
            "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-emerald-700 hover:bg-emerald-900/20 hover:text-emerald-300"
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
