//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the session store into a reactive signal. It is seeded from the
//! store at startup and then only changes through session events, so route
//! guards and the navigation bar never read storage directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::session::Session;
use crate::session::events::SessionEvent;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self { user: session.current_user() }
    }

    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::LoggedIn(user) => self.user = Some(user.clone()),
            SessionEvent::LoggedOut => self.user = None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name shown in the navigation bar.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }
}
