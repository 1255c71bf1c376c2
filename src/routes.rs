//! Static route table for the application shell.
//!
//! ARCHITECTURE
//! ============
//! The table is declared once as `const` data and never mutated; the live
//! `leptos_router` declaration in `app.rs` mirrors it entry for entry. Each
//! leaf route belongs to exactly one group, and the group decides which
//! layout wrapper encloses it: public routes render under `AuthLayout`,
//! private routes under `RootLayout`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Which layout shell encloses a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGroup {
    /// Unauthenticated routes rendered under `AuthLayout`.
    Public,
    /// Authenticated routes rendered under `RootLayout`.
    Private,
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// URL path; `"/"` is the index route.
    pub path: &'static str,
    pub group: RouteGroup,
}

/// The full route surface of the shell, in declaration order.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/sign-in",
        group: RouteGroup::Public,
    },
    RouteEntry {
        path: "/sign-up",
        group: RouteGroup::Public,
    },
    RouteEntry {
        path: "/",
        group: RouteGroup::Private,
    },
];

/// Strip trailing slashes so `/sign-in/` matches `/sign-in`. The bare root
/// stays `/`.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Look up the route group for a URL path.
///
/// Returns `None` for any path outside the table; the router renders the
/// not-found fallback for those.
pub fn group_for_path(path: &str) -> Option<RouteGroup> {
    let path = normalize_path(path);
    ROUTES
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.group)
}
