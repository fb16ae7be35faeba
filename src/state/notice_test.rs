use super::*;
use crate::net::error::CONFLICT_NOTICE_MS;

#[test]
fn conflict_notice_uses_backend_text_and_long_duration() {
    let notice = Notice::from_error(&ApiError::Conflict("Plan overlaps".to_owned()), "Subscription failed", 3);
    assert_eq!(notice.kind, NoticeKind::Conflict);
    assert_eq!(notice.text, "Plan overlaps");
    assert_eq!(notice.display_ms, CONFLICT_NOTICE_MS);
    assert_eq!(notice.seq, 3);
}

#[test]
fn generic_error_notice_uses_fallback() {
    let notice = Notice::from_error(&ApiError::Network("offline".to_owned()), "Subscription failed", 1);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Subscription failed");
    assert_eq!(notice.display_ms, ERROR_NOTICE_MS);
    assert_eq!(notice.class(), "notice notice--error");
}

#[test]
fn success_notice_class() {
    assert_eq!(Notice::success("ok", 0).class(), "notice notice--success");
}
