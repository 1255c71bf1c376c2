//! Fallback page for paths outside the route table.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>
                "The page you are looking for does not exist. "
                <a href="/">"Go home"</a>
            </p>
        </div>
    }
}
