#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and bootstrap status.
///
/// `loading` is true while the initial `/api/auth/me` fetch is in flight;
/// layout redirects only fire once it has settled so an already
/// signed-in user is not bounced to `/sign-in` during hydration.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// True once the bootstrap fetch has resolved to a user.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
