use super::*;

// =============================================================
// Route table shape
// =============================================================

#[test]
fn table_declares_exactly_three_routes() {
    assert_eq!(ROUTES.len(), 3);
}

#[test]
fn sign_in_and_sign_up_are_public() {
    assert_eq!(group_for_path("/sign-in"), Some(RouteGroup::Public));
    assert_eq!(group_for_path("/sign-up"), Some(RouteGroup::Public));
}

#[test]
fn index_route_is_private() {
    assert_eq!(group_for_path("/"), Some(RouteGroup::Private));
}

#[test]
fn unknown_paths_match_nothing() {
    assert_eq!(group_for_path("/profile"), None);
    assert_eq!(group_for_path("/sign-in/extra"), None);
    assert_eq!(group_for_path("/signin"), None);
}

// =============================================================
// Path normalization
// =============================================================

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(group_for_path("/sign-in/"), Some(RouteGroup::Public));
    assert_eq!(group_for_path("/sign-up///"), Some(RouteGroup::Public));
}

#[test]
fn empty_path_is_the_index_route() {
    assert_eq!(group_for_path(""), Some(RouteGroup::Private));
}

#[test]
fn groups_are_distinct() {
    assert_ne!(RouteGroup::Public, RouteGroup::Private);
}
