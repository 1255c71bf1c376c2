//! Layout wrappers for the two route groups.
//!
//! ARCHITECTURE
//! ============
//! Exactly one layout encloses each leaf route: `AuthLayout` for the
//! public group, `RootLayout` for the private group. Both install an auth
//! redirect so users always land in the group matching their session.

pub mod auth;
pub mod root;
