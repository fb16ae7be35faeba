//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP failure is classified once, here, from its status and body.
//! Pages only ever ask an error for its display text and how long to show it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Display time for ordinary failure notices.
pub const ERROR_NOTICE_MS: u32 = 5_000;
/// Display time for overlap conflicts; the backend message is usually long.
pub const CONFLICT_NOTICE_MS: u32 = 8_000;

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const CONFLICT_FALLBACK: &str = "You already have an active subscription";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 from `/login`.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// 409, typically an overlapping subscription.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// No HTTP transport in this build (non-browser target).
    #[error("backend not available in this build")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_text);
        if status == 409 {
            return Self::Conflict(message.unwrap_or_else(|| CONFLICT_FALLBACK.to_owned()));
        }
        Self::Rejected { status, message }
    }

    /// Text to show the user. `fallback` is used when the failure carries no
    /// backend-provided message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_owned(),
            Self::Conflict(message) | Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } | Self::Network(_) | Self::Malformed(_) | Self::Unavailable => {
                fallback.to_owned()
            }
        }
    }

    /// Reinterpret a failure from `POST /login`: only there does a 401 mean
    /// the email or password was wrong.
    #[must_use]
    pub fn for_login(self) -> Self {
        match self {
            Self::Rejected { status: 401, .. } => Self::InvalidCredentials,
            other => other,
        }
    }

    /// How long a notice for this error stays on screen.
    #[must_use]
    pub fn notice_ms(&self) -> u32 {
        if matches!(self, Self::Conflict(_)) { CONFLICT_NOTICE_MS } else { ERROR_NOTICE_MS }
    }
}
