//! Client-side session: the persisted user plus change notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` is the single source of truth for "is someone signed in";
//! `events` tells mounted components when that answer changes. [`Session`]
//! is the only writer, so every store mutation is paired with an event.

pub mod events;
pub mod store;


use crate::net::types::User;

use self::events::{SessionEvent, SessionEvents};
use self::store::{SessionStore, StorageError};

#[derive(Clone, Debug)]
pub struct Session {
    store: SessionStore,
    events: SessionEvents,
}

impl Session {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store, events: SessionEvents::new() }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(SessionStore::in_memory())
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.store.load()
    }

    /// Persist `user` and announce the login.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the record could not be written; no event
    /// is published in that case.
    pub fn sign_in(&self, user: &User) -> Result<(), StorageError> {
        self.store.save(user)?;
        self.events.publish(&SessionEvent::LoggedIn(user.clone()));
        Ok(())
    }

    /// Drop the stored user and announce the logout.
    pub fn sign_out(&self) {
        self.store.clear();
        self.events.publish(&SessionEvent::LoggedOut);
    }

    #[must_use]
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }
}
