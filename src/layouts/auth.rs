//! Public shell around the sign-in and sign-up screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_authed_redirect;

/// Layout for unauthenticated routes: form column plus hero side panel.
/// A signed-in user is redirected to `/`.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_authed_redirect(auth, use_navigate());

    view! {
        <main class="auth-layout">
            <section class="auth-layout__form">{children()}</section>
            <aside class="auth-layout__hero" aria-hidden="true"></aside>
        </main>
    }
}
