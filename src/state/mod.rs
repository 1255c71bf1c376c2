//! Shared reactive state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppRoot` owns one `RwSignal` per state struct and provides it to the
//! tree; layouts, pages, and the toast overlay read and write through
//! those signals rather than holding state of their own.

pub mod auth;
pub mod toast;
