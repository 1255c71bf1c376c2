use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        image_url: None,
    }
}

#[test]
fn default_is_logged_out_and_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn user_present_while_loading_is_not_authenticated() {
    let state = AuthState {
        user: Some(sample_user()),
        loading: true,
    };
    assert!(!state.is_authenticated());
}

#[test]
fn user_present_after_load_is_authenticated() {
    let state = AuthState {
        user: Some(sample_user()),
        loading: false,
    };
    assert!(state.is_authenticated());
}
