//! Top bar for the authenticated shell: app name, identity, sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Topbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let identity = move || {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_else(|| "...".to_owned())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/sign-in");
                }
            });
        }
    };

    view! {
        <header class="topbar">
            <a href="/" class="topbar__brand">"Lumen"</a>
            <span class="topbar__spacer"></span>
            <span class="topbar__identity">{identity}</span>
            <button class="btn topbar__logout" on:click=on_logout title="Sign out">
                "Sign out"
            </button>
        </header>
    }
}
