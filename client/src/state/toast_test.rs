use super::*;

#[test]
fn push_shows_message_and_bumps_seq() {
    let mut toast = ToastState::default();
    let seq = toast.push("已复制", ToastKind::Success);
    assert_eq!(seq, 1);
    assert_eq!(toast.message.as_deref(), Some("已复制"));
}

#[test]
fn dismiss_with_current_seq_hides() {
    let mut toast = ToastState::default();
    let seq = toast.push("已复制", ToastKind::Success);
    assert!(toast.dismiss(seq));
    assert!(toast.message.is_none());
    assert!(!toast.dismiss(seq));
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut toast = ToastState::default();
    let first = toast.push("已复制", ToastKind::Success);
    let _second = toast.push("复制失败", ToastKind::Error);
    assert!(!toast.dismiss(first));
    assert_eq!(toast.message.as_deref(), Some("复制失败"));
    assert_eq!(toast.kind, ToastKind::Error);
}
