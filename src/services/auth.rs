//! Login, registration, and logout actions.
//!
//! Each action validates locally first and only then issues its single
//! request. A failure at any step leaves the session exactly as it was.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::{log, warn};

use crate::net::api::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::session::Session;
use crate::session::store::StorageError;
use crate::util::auth::{AppRoute, POST_AUTH_ROUTE};
use crate::util::validate::{LoginErrors, LoginForm, SignupErrors, SignupForm, validate_login, validate_signup};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed";
const SESSION_SAVE_FAILED: &str = "Signed in, but your session could not be saved in this browser";

/// Why an auth action did not complete. `F` holds per-field form errors.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AuthError<F> {
    #[error("form has invalid fields")]
    Validation(F),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl<F> AuthError<F> {
    /// Top-level message for the form; `None` for field-level problems.
    #[must_use]
    pub fn banner(&self, fallback: &str) -> Option<String> {
        match self {
            Self::Validation(_) => None,
            Self::Api(err) => Some(err.user_message(fallback)),
            Self::Storage(_) => Some(SESSION_SAVE_FAILED.to_owned()),
        }
    }

    #[must_use]
    pub fn field_errors(&self) -> Option<&F> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Api(_) | Self::Storage(_) => None,
        }
    }
}

/// A completed login or registration.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSuccess {
    pub user: User,
    /// Screen to navigate to next.
    pub redirect: AppRoute,
}

/// Validate `form`, call `POST /login`, and persist the returned user.
///
/// # Errors
///
/// Returns field errors without touching the network, or the API/storage
/// failure. The session is unchanged on any error.
pub async fn login(
    api: &dyn PortalApi,
    session: &Session,
    form: &LoginForm,
) -> Result<AuthSuccess, AuthError<LoginErrors>> {
    let request = validate_login(form).map_err(AuthError::Validation)?;
    let user = api.login(&request).await.inspect_err(|e| warn!("login failed: {e}"))?;
    session.sign_in(&user)?;
    log!("signed in as user {}", user.id);
    Ok(AuthSuccess { user, redirect: POST_AUTH_ROUTE })
}

/// Validate `form`, call `POST /register`, and persist the created user.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(
    api: &dyn PortalApi,
    session: &Session,
    form: &SignupForm,
) -> Result<AuthSuccess, AuthError<SignupErrors>> {
    let request = validate_signup(form).map_err(AuthError::Validation)?;
    let user = api
        .register(&request)
        .await
        .inspect_err(|e| warn!("registration failed: {e}"))?;
    session.sign_in(&user)?;
    log!("registered user {}", user.id);
    Ok(AuthSuccess { user, redirect: POST_AUTH_ROUTE })
}

/// Forget the signed-in user and notify listeners.
pub fn logout(session: &Session) {
    session.sign_out();
    log!("signed out");
}
