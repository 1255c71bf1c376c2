//! Sign-up form for the public route group.

use leptos::prelude::*;

use crate::components::toaster::push_toast;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::form::validate_signup_input;

#[component]
pub fn SignupForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_signup_input(
            &name.get(),
            &username.get(),
            &email.get(),
            &password.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                push_toast(toasts, ToastKind::Error, "Sign up", message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&payload).await {
                Ok(user) => {
                    push_toast(toasts, ToastKind::Success, "Welcome", "Your account is ready.");
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                    // AuthLayout's redirect effect takes it to `/`.
                }
                Err(e) => {
                    log::warn!("sign-up failed: {e}");
                    push_toast(toasts, ToastKind::Error, "Sign up failed", "Please try again.");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, auth);
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h1 class="auth-form__title">"Create a new account"</h1>
            <p class="auth-form__subtitle">"Enter your details to use Lumen."</p>
            <label class="auth-form__label">
                "Name"
                <input
                    class="auth-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-form__label">
                "Username"
                <input
                    class="auth-form__input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
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
                {move || if busy.get() { "Creating account..." } else { "Sign up" }}
            </button>
            <p class="auth-form__switch">
                "Already have an account? "
                <a href="/sign-in">"Log in"</a>
            </p>
        </form>
    }
}
