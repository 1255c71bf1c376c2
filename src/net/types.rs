//! DTOs for the `/api/auth/*` boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Display name shown in the top bar.
    pub name: String,
    pub username: String,
    pub email: String,
    /// Avatar URL, if the account has one.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request body for account creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupPayload {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}
