use super::*;

// =============================================================
// Sign-in
// =============================================================

#[test]
fn signin_trims_email() {
    assert_eq!(
        validate_signin_input("  ada@example.com  ", "longenough"),
        Ok(("ada@example.com".to_owned(), "longenough".to_owned()))
    );
}

#[test]
fn signin_rejects_malformed_email() {
    assert_eq!(
        validate_signin_input("not-an-email", "longenough"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_signin_input("@example.com", "longenough"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_signin_input("ada@nodot", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn signin_rejects_short_password() {
    assert_eq!(
        validate_signin_input("ada@example.com", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn signin_password_is_not_trimmed() {
    // Leading/trailing spaces are legal password characters.
    assert_eq!(
        validate_signin_input("ada@example.com", "  spaces  "),
        Ok(("ada@example.com".to_owned(), "  spaces  ".to_owned()))
    );
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn signup_accepts_valid_fields() {
    let payload = validate_signup_input(" Ada Lovelace ", " ada ", "ada@example.com", "longenough")
        .expect("valid input");
    assert_eq!(payload.name, "Ada Lovelace");
    assert_eq!(payload.username, "ada");
}

#[test]
fn signup_rejects_short_name() {
    assert_eq!(
        validate_signup_input("A", "ada", "ada@example.com", "longenough"),
        Err("Name must be at least 2 characters.")
    );
}

#[test]
fn signup_rejects_short_username() {
    assert_eq!(
        validate_signup_input("Ada", " a ", "ada@example.com", "longenough"),
        Err("Username must be at least 2 characters.")
    );
}

#[test]
fn signup_reports_first_failing_rule() {
    assert_eq!(
        validate_signup_input("", "", "bad", "short"),
        Err("Name must be at least 2 characters.")
    );
}
