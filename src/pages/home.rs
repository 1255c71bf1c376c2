//! Home page — the authenticated landing route.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.name))
    };

    view! {
        <div class="home-page">
            <h1 class="home-page__greeting">{greeting}</h1>
            <h2 class="home-page__heading">"Home Feed"</h2>
            <p class="home-page__empty">"Nothing here yet. Follow some creators to fill your feed."</p>
        </div>
    }
}
