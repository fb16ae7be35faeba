use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn recorder(events: &SessionEvents) -> (ListenerId, Arc<Mutex<Vec<SessionEvent>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = events.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    (id, seen)
}

#[test]
fn publish_reaches_every_listener() {
    let events = SessionEvents::new();
    let (_, first) = recorder(&events);
    let (_, second) = recorder(&events);

    events.publish(&SessionEvent::LoggedOut);

    assert_eq!(*first.lock().unwrap(), vec![SessionEvent::LoggedOut]);
    assert_eq!(*second.lock().unwrap(), vec![SessionEvent::LoggedOut]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let events = SessionEvents::new();
    let (id, seen) = recorder(&events);

    assert!(events.unsubscribe(id));
    events.publish(&SessionEvent::LoggedOut);

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn unsubscribe_unknown_id_returns_false() {
    let events = SessionEvents::new();
    let (id, _) = recorder(&events);
    assert!(events.unsubscribe(id));
    assert!(!events.unsubscribe(id));
}

#[test]
fn clones_share_listeners() {
    let events = SessionEvents::new();
    let (_, seen) = recorder(&events);
    let user = User { id: 5, name: "eve".to_owned(), email: "eve@example.com".to_owned() };

    events.clone().publish(&SessionEvent::LoggedIn(user.clone()));

    assert_eq!(*seen.lock().unwrap(), vec![SessionEvent::LoggedIn(user)]);
}

#[test]
fn listener_may_unsubscribe_itself_during_publish() {
    let events = SessionEvents::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let slot: Arc<Mutex<Option<ListenerId>>> = Arc::new(Mutex::new(None));

    let id = {
        let inner = events.clone();
        let calls = Arc::clone(&calls);
        let slot = Arc::clone(&slot);
        events.subscribe(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = *slot.lock().unwrap() {
                inner.unsubscribe(id);
            }
        })
    };
    *slot.lock().unwrap() = Some(id);

    events.publish(&SessionEvent::LoggedOut);
    events.publish(&SessionEvent::LoggedOut);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
