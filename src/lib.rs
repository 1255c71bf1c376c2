//! # lumen-client
//!
//! Leptos + WASM frontend shell for the Lumen photo-sharing application.
//!
//! This crate owns the top-level route table and the chrome around it:
//! layout wrappers for the public (sign-in/sign-up) and private (home)
//! route groups, the sign-in and sign-up forms, and the globally mounted
//! toast overlay. Feed, profile, and post-creation screens hang off the
//! same shell but live behind the private group.

pub mod app;
pub mod components;
pub mod layouts;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered DOM into a live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("lumen-client hydrating");
    leptos::mount::hydrate_body(app::App);
}
