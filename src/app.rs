//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` declares the live route table (mirroring `routes::ROUTES`),
//! provides the auth and toast contexts, and mounts the toast overlay
//! exactly once, outside the routes, so it survives navigation. Public
//! routes render under `AuthLayout`, the private index route under
//! `RootLayout`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::signin_form::SigninForm;
use crate::components::signup_form::SignupForm;
use crate::components::toaster::Toaster;
use crate::layouts::auth::AuthLayout;
use crate::layouts::root::RootLayout;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Takes no inputs; declares the static route table and kicks off the
/// auth bootstrap fetch on hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    // Resolve the session once per page load; layout redirects wait on
    // `loading` so a signed-in user is not bounced during hydration.
    #[cfg(feature = "hydrate")]
    {
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| {
                a.user = user;
                a.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/lumen.css"/>
        <Title text="Lumen"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                // public
                <Route
                    path=StaticSegment("sign-in")
                    view=|| view! { <AuthLayout><SigninForm/></AuthLayout> }
                />
                <Route
                    path=StaticSegment("sign-up")
                    view=|| view! { <AuthLayout><SignupForm/></AuthLayout> }
                />
                // private
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RootLayout><HomePage/></RootLayout> }
                />
            </Routes>
        </Router>
        <Toaster/>
    }
}
