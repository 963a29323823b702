use dioxus::prelude::*;

use crate::{
    app::persist_wishlist,
    domain::AppState,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::version::{check_for_update, version_label, APP_AUTHOR, APP_NAME, APP_REPO_URL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let active_theme = state.with(|st| st.theme);
    let wishlist_lines = state.with(|st| st.selection.wishlist.len());
    let catalog_size = state.with(|st| st.catalog.len());
    let with_images = state.with(|st| {
        st.catalog
            .iter()
            .filter(|entry| entry.item.image.is_some())
            .count()
    });

    let update_status = use_signal(|| None::<String>);

    let on_clear_wishlist = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.selection.wishlist.clear());
            persist_wishlist(&state);
            push_toast(toasts.clone(), ToastKind::Info, "Wishlist cleared.");
        }
    };

    let on_check_update = {
        let toasts = toasts.clone();
        let update_status = update_status.clone();
        move |_| {
            let toasts = toasts.clone();
            let mut update_status = update_status.clone();
            spawn(async move {
                match check_for_update().await {
                    Ok(info) => update_status.set(Some(info.to_string())),
                    Err(err) => {
                        update_status.set(None);
                        push_toast(
                            toasts.clone(),
                            ToastKind::Error,
                            format!("Update check failed: {err}"),
                        );
                    }
                }
            });
        }
    };

    let version = version_label();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_solid(active_theme)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Wishlist Data" }
                p {
                    class: "mt-2 text-sm {theme::text_muted(active_theme)}",
                    {format!(
                        "{wishlist_lines} line(s) stored locally. The wishlist is the only thing saved between sessions; budget and filters reset on launch."
                    )}
                }
                button {
                    class: "mt-4 rounded-lg border border-rose-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-rose-200 hover:bg-rose-500/10",
                    onclick: on_clear_wishlist,
                    "Clear Wishlist"
                }
            }

            section {
                class: "{theme::panel_solid(active_theme)} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Updates" }
                p { class: "mt-2 text-sm {theme::text_muted(active_theme)}", "Running {version}." }
                if let Some(status) = update_status() {
                    p { class: "mt-2 text-sm {theme::accent_text(active_theme)}", "{status}" }
                }
                button {
                    class: "mt-4 {theme::btn_primary(active_theme)} text-xs uppercase tracking-wide",
                    onclick: on_check_update,
                    "Check for Updates"
                }
            }

            section {
                class: "flex flex-col items-center gap-2 {theme::panel_solid(active_theme)} p-6 text-center",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p {
                    class: "text-sm {theme::text_muted(active_theme)}",
                    {format!("{APP_NAME} ships a snapshot of the shop catalog ({catalog_size} items, {with_images} with product shots). Prices change with shop seasons; trust the shop page over this tool.")}
                }
                a {
                    href: APP_REPO_URL,
                    target: "_blank",
                    rel: "noreferrer",
                    class: "{theme::link_class(active_theme)}",
                    "Source & issue tracker"
                }
                p { class: "text-xs text-slate-600", "Maintained by {APP_AUTHOR}." }
            }
        }
    }
}
