use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastKind::Success, "one");
    let b = toasts.push(ToastKind::Error, "two");
    assert!(b > a);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[1].kind, ToastKind::Error);
    assert_eq!(toasts.items[1].message, "two");
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut toasts = ToastState::default();
    for i in 0..5 {
        toasts.push(ToastKind::Success, format!("t{i}"));
    }
    assert_eq!(toasts.items.len(), MAX_VISIBLE);
    let messages: Vec<_> = toasts.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["t2", "t3", "t4"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastKind::Success, "a");
    let b = toasts.push(ToastKind::Success, "b");
    toasts.dismiss(a);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut toasts = ToastState::default();
    toasts.push(ToastKind::Error, "a");
    toasts.dismiss(999);
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastKind::Success, "a");
    toasts.dismiss(a);
    let b = toasts.push(ToastKind::Success, "b");
    assert_ne!(a, b);
}
