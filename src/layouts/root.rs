//! Authenticated shell around the private route group.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::topbar::Topbar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Layout for authenticated routes: top bar chrome around the page
/// content. An unauthenticated user is redirected to `/sign-in` once the
/// bootstrap fetch settles.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="root-layout">
            <Topbar/>
            <main class="root-layout__content">{children()}</main>
        </div>
    }
}
