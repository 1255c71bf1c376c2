use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a", "first");
    let b = state.push(ToastKind::Info, "b", "second");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn push_past_limit_evicts_oldest() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "t", "0");
    for i in 1..=TOAST_LIMIT {
        state.push(ToastKind::Info, "t", i.to_string());
    }
    assert_eq!(state.toasts.len(), TOAST_LIMIT);
    assert!(state.toasts.iter().all(|t| t.id != first));
}

#[test]
fn dismiss_removes_exactly_the_given_id() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Error, "a", "oops");
    let b = state.push(ToastKind::Success, "b", "done");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a", "msg");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn clear_empties_the_queue() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a", "msg");
    state.push(ToastKind::Info, "b", "msg");
    state.clear();
    assert!(state.toasts.is_empty());
}

#[test]
fn kind_css_classes_are_distinct() {
    assert_ne!(ToastKind::Info.css_class(), ToastKind::Success.css_class());
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert_ne!(ToastKind::Info.css_class(), ToastKind::Error.css_class());
}

#[test]
fn default_kind_is_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
}
