//! Global toast overlay.
//!
//! Mounted exactly once by `AppRoot`, outside the route table, so toasts
//! survive navigation.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays visible before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_TTL_SECS: u64 = 5;

/// Push a toast and schedule its auto-dismissal. On SSR the toast is
/// pushed without a timer; the overlay is only interactive in the browser.
pub fn push_toast(
    toasts: RwSignal<ToastState>,
    kind: ToastKind,
    title: impl Into<String>,
    message: impl Into<String>,
) {
    let mut id = 0;
    toasts.update(|state| {
        id = state.push(kind, title, message);
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_TTL_SECS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed overlay rendering the visible toast queue, oldest first.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.kind.css_class())>
                                <div class="toast__body">
                                    <span class="toast__title">{toast.title}</span>
                                    <span class="toast__message">{toast.message}</span>
                                </div>
                                <button
                                    class="toast__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
