//! Publish/subscribe channel for session changes.
//!
//! Components that render identity (the navigation bar, route guards) register
//! a listener instead of polling storage, so a logout is reflected everywhere
//! in the same tick.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    LoggedIn(User),
    LoggedOut,
}

/// Handle returned by [`SessionEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

#[derive(Clone, Default)]
pub struct SessionEvents {
    inner: Arc<Mutex<Listeners>>,
}

impl SessionEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every future event.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = ListenerId(guard.next_id);
        guard.next_id += 1;
        guard.entries.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = guard.entries.len();
        guard.entries.retain(|(entry_id, _)| *entry_id != id);
        guard.entries.len() != before
    }

    /// Deliver `event` to every listener in subscription order.
    ///
    /// The listener list is snapshotted first so a listener may subscribe or
    /// unsubscribe while being notified.
    pub fn publish(&self, event: &SessionEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).entries.len()
    }
}

impl std::fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvents").field("listeners", &self.listener_count()).finish()
    }
}
