//! Pure validation helpers for the sign-in and sign-up forms.
//!
//! Kept separate from the components so the rules are unit-testable
//! without a DOM.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::SignupPayload;

const MIN_PASSWORD_LEN: usize = 8;
const MIN_NAME_LEN: usize = 2;

fn valid_email(email: &str) -> bool {
    // Server does the real validation; this only catches obvious typos.
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

/// Validate sign-in fields. Returns trimmed `(email, password)` on success.
///
/// # Errors
///
/// Returns a user-facing message naming the first failing rule.
pub fn validate_signin_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate sign-up fields. Returns a ready-to-send payload on success.
///
/// # Errors
///
/// Returns a user-facing message naming the first failing rule.
pub fn validate_signup_input(
    name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<SignupPayload, &'static str> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err("Name must be at least 2 characters.");
    }
    let username = username.trim();
    if username.chars().count() < MIN_NAME_LEN {
        return Err("Username must be at least 2 characters.");
    }
    let email = email.trim();
    if !valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(SignupPayload {
        name: name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}
