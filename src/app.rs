use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::catalog,
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{CatalogPage, RankingsPage, SettingsPage, WishlistPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_wishlist, save_wishlist},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/catalog")]
    Catalog {},
    #[route("/rankings")]
    Rankings {},
    #[route("/wishlist")]
    Wishlist {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| AppState::with_catalog(catalog::shop_catalog().to_vec()));
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_wishlist() {
                state.with_mut(|st| st.apply_persisted_wishlist(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Fire-and-forget wishlist save. A failed write is logged and dropped;
/// the in-memory wishlist stays authoritative for the session.
pub fn persist_wishlist(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.wishlist_snapshot());
    if let Err(err) = save_wishlist(&snapshot) {
        println!("[persist] Failed to save wishlist: {err}");
    }
}

#[component]
pub fn Catalog() -> Element {
    rsx! { Shell { CatalogPage {} } }
}

#[component]
pub fn Rankings() -> Element {
    rsx! { Shell { RankingsPage {} } }
}

#[component]
pub fn Wishlist() -> Element {
    rsx! { Shell { WishlistPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
