//! Sign-in form for the public route group.

use leptos::prelude::*;

use crate::components::toaster::push_toast;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::validate_signin_input;

#[component]
pub fn SigninForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_signin_input(&email.get(), &password.get()) {
                Ok(fields) => fields,
                Err(message) => {
                    push_toast(toasts, ToastKind::Error, "Sign in", message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(user) => {
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                    // AuthLayout's redirect effect takes it to `/`.
                }
                Err(e) => {
                    log::warn!("sign-in failed: {e}");
                    push_toast(toasts, ToastKind::Error, "Sign in failed", "Please try again.");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1 class="auth-form__title">"Log in to your account"</h1>
            <p class="auth-form__subtitle">"Welcome back! Please enter your details."</p>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="auth-form__switch">
                "Don't have an account? "
                <a href="/sign-up">"Sign up"</a>
            </p>
        </form>
    }
}
