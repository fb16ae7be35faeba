use super::*;

fn alice() -> User {
    User { id: 1, name: "alice".to_owned(), email: "alice@example.com".to_owned() }
}

fn store_over(backend: &Arc<MemoryStore>) -> SessionStore {
    SessionStore::new(backend.clone())
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_set_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn load_is_none_when_empty() {
    assert_eq!(SessionStore::in_memory().load(), None);
}

#[test]
fn save_then_load_returns_user() {
    let store = SessionStore::in_memory();
    store.save(&alice()).unwrap();
    assert_eq!(store.load(), Some(alice()));
}

#[test]
fn save_overwrites_previous_record() {
    let store = SessionStore::in_memory();
    store.save(&alice()).unwrap();
    let bob = User { id: 2, name: "bob".to_owned(), email: "bob@example.com".to_owned() };
    store.save(&bob).unwrap();
    assert_eq!(store.load(), Some(bob));
}

#[test]
fn save_writes_under_user_key() {
    let backend = Arc::new(MemoryStore::default());
    store_over(&backend).save(&alice()).unwrap();
    let raw = backend.get(SESSION_KEY).unwrap();
    assert!(raw.contains("\"id\":1"));
}

#[test]
fn clear_removes_record() {
    let store = SessionStore::in_memory();
    store.save(&alice()).unwrap();
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn load_fails_soft_on_invalid_json() {
    let backend = Arc::new(MemoryStore::default());
    backend.set(SESSION_KEY, "{not json").unwrap();
    assert_eq!(store_over(&backend).load(), None);
}

#[test]
fn load_fails_soft_on_wrong_shape() {
    let backend = Arc::new(MemoryStore::default());
    backend.set(SESSION_KEY, r#"{"name": "no id"}"#).unwrap();
    assert_eq!(store_over(&backend).load(), None);
}

#[test]
fn writes_are_visible_to_other_handles() {
    let backend = Arc::new(MemoryStore::default());
    let writer = store_over(&backend);
    let reader = store_over(&backend);
    writer.save(&alice()).unwrap();
    assert_eq!(reader.load(), Some(alice()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_off_browser() {
    let store = SessionStore::browser();
    assert_eq!(store.save(&alice()), Err(StorageError::Unavailable));
    assert_eq!(store.load(), None);
}
