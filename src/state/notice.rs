//! Transient status banners.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::net::error::{ApiError, ERROR_NOTICE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    /// A 409 from the backend; shown longer than other errors.
    Conflict,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub display_ms: u32,
    /// Bumped per notice so a stale timer cannot clear a newer banner.
    pub seq: u64,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>, seq: u64) -> Self {
        Self { kind: NoticeKind::Success, text: text.into(), display_ms: ERROR_NOTICE_MS, seq }
    }

    #[must_use]
    pub fn from_error(err: &ApiError, fallback: &str, seq: u64) -> Self {
        let kind = if matches!(err, ApiError::Conflict(_)) { NoticeKind::Conflict } else { NoticeKind::Error };
        Self { kind, text: err.user_message(fallback), display_ms: err.notice_ms(), seq }
    }

    /// CSS modifier for the banner.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Conflict => "notice notice--conflict",
        }
    }
}
