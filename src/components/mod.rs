//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state from Leptos context providers;
//! route-level orchestration stays in `layouts` and `pages`.

pub mod signin_form;
pub mod signup_form;
pub mod toaster;
pub mod topbar;
