use std::sync::{Arc, Mutex};

use super::*;
use crate::session::events::SessionEvent;
use crate::testing::{FakeApi, user};

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

fn signup_form(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_success_saves_session_and_targets_dashboard() {
    let api = FakeApi { login: Ok(user(1)), ..FakeApi::default() };
    let session = Session::in_memory();

    let success = login(&api, &session, &login_form("a@b.com", "Aa1!")).await.unwrap();

    assert_eq!(session.current_user().map(|u| u.id), Some(1));
    assert_eq!(success.redirect, AppRoute::Dashboard);
    assert_eq!(api.calls(), vec!["POST /login a@b.com".to_owned()]);
}

#[tokio::test]
async fn login_success_notifies_listeners() {
    let api = FakeApi { login: Ok(user(1)), ..FakeApi::default() };
    let session = Session::in_memory();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.events().subscribe(move |e| sink.lock().unwrap().push(e.clone()));

    login(&api, &session, &login_form("a@b.com", "Aa1!")).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![SessionEvent::LoggedIn(user(1))]);
}

#[tokio::test]
async fn login_unauthorized_leaves_session_empty() {
    let api = FakeApi { login: Err(ApiError::InvalidCredentials), ..FakeApi::default() };
    let session = Session::in_memory();

    let err = login(&api, &session, &login_form("a@b.com", "wrong")).await.unwrap_err();

    assert_eq!(err.banner(LOGIN_FAILED).as_deref(), Some("Invalid email or password"));
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn login_malformed_payload_creates_no_session() {
    let api = FakeApi { login: Err(ApiError::Malformed("missing id".to_owned())), ..FakeApi::default() };
    let session = Session::in_memory();

    let err = login(&api, &session, &login_form("a@b.com", "Aa1!")).await.unwrap_err();

    assert_eq!(err.banner(LOGIN_FAILED).as_deref(), Some(LOGIN_FAILED));
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn login_invalid_email_sends_nothing() {
    let api = FakeApi { login: Ok(user(1)), ..FakeApi::default() };
    let session = Session::in_memory();

    let err = login(&api, &session, &login_form("a@b.io", "Aa1!")).await.unwrap_err();

    assert!(api.calls().is_empty());
    assert_eq!(err.banner(LOGIN_FAILED), None);
    assert!(err.field_errors().and_then(|e| e.email.as_ref()).is_some());
}

#[tokio::test]
async fn login_failure_keeps_previous_session() {
    let api = FakeApi { login: Err(ApiError::InvalidCredentials), ..FakeApi::default() };
    let session = Session::in_memory();
    session.sign_in(&user(7)).unwrap();

    let _ = login(&api, &session, &login_form("a@b.com", "nope")).await;

    assert_eq!(session.current_user(), Some(user(7)));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn login_reports_unsaved_session() {
    use crate::session::store::SessionStore;

    let api = FakeApi { login: Ok(user(1)), ..FakeApi::default() };
    let session = Session::new(SessionStore::browser());

    let err = login(&api, &session, &login_form("a@b.com", "Aa1!")).await.unwrap_err();

    assert!(matches!(err, AuthError::Storage(_)));
    assert!(err.banner(LOGIN_FAILED).is_some());
}

// =============================================================
// register
// =============================================================

#[tokio::test]
async fn register_mismatched_confirm_sends_nothing() {
    let api = FakeApi { register: Ok(user(2)), ..FakeApi::default() };
    let session = Session::in_memory();

    let err = register(&api, &session, &signup_form("Secret1", "Secret2")).await.unwrap_err();

    assert!(api.calls().is_empty());
    assert_eq!(
        err.field_errors().and_then(|e| e.confirm.as_deref()),
        Some("Passwords do not match")
    );
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn register_success_saves_session() {
    let api = FakeApi { register: Ok(user(2)), ..FakeApi::default() };
    let session = Session::in_memory();

    let success = register(&api, &session, &signup_form("Secret1", "Secret1")).await.unwrap();

    assert_eq!(success.user.id, 2);
    assert_eq!(session.current_user(), Some(user(2)));
    assert_eq!(api.calls(), vec!["POST /register alice@example.com".to_owned()]);
}

#[tokio::test]
async fn register_rejection_surfaces_backend_error() {
    let api = FakeApi {
        register: Err(ApiError::Rejected { status: 400, message: Some("Email already registered".to_owned()) }),
        ..FakeApi::default()
    };
    let session = Session::in_memory();

    let err = register(&api, &session, &signup_form("Secret1", "Secret1")).await.unwrap_err();

    assert_eq!(err.banner(REGISTER_FAILED).as_deref(), Some("Email already registered"));
    assert_eq!(session.current_user(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_broadcasts() {
    let session = Session::in_memory();
    session.sign_in(&user(1)).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.events().subscribe(move |e| sink.lock().unwrap().push(e.clone()));

    logout(&session);

    assert_eq!(session.current_user(), None);
    assert_eq!(*seen.lock().unwrap(), vec![SessionEvent::LoggedOut]);
}
