//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both layout wrappers apply a redirect based on auth state; the helpers
//! here keep that behavior identical across routes. Redirects only fire
//! once the bootstrap fetch has settled (`loading == false`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/sign-in` whenever auth has loaded and no user is present.
/// Installed by `RootLayout` for the private route group.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/sign-in", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever a signed-in user lands on a public route.
/// Installed by `AuthLayout` for the sign-in/sign-up screens.
pub fn install_authed_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });
}
