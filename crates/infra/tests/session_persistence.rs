//! Integration tests for the session store over file-backed storage

use std::sync::Arc;

use vagtportal_core::{SessionStore, SessionStorage};
use vagtportal_domain::UserProfile;
use vagtportal_infra::FileSessionStorage;

fn profile() -> UserProfile {
    UserProfile {
        id: 7,
        email: "anna@example.com".to_string(),
        firstname: Some("Anna".to_string()),
        surname: Some("Jensen".to_string()),
        confirmed: true,
        blocked: false,
    }
}

#[test]
fn session_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::new(Arc::new(FileSessionStorage::new(&path)));
    store.login(profile(), "tok123");
    drop(store);

    let reloaded = SessionStore::new(Arc::new(FileSessionStorage::new(&path)));
    assert!(reloaded.is_logged_in());
    assert_eq!(reloaded.token().as_deref(), Some("tok123"));
    assert_eq!(reloaded.user().map(|u| u.email), Some("anna@example.com".to_string()));
}

#[test]
fn logout_clears_the_persisted_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::new(Arc::new(FileSessionStorage::new(&path)));
    store.login(profile(), "tok123");
    store.logout();
    drop(store);

    let reloaded = SessionStore::new(Arc::new(FileSessionStorage::new(&path)));
    assert!(!reloaded.is_logged_in());
}

#[test]
fn corrupt_persisted_profile_recovers_to_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let storage = FileSessionStorage::new(&path);
    storage.set("volunteer_jwt", "tok123").unwrap();
    storage.set("volunteer_user", "{ not json").unwrap();
    drop(storage);

    let storage = Arc::new(FileSessionStorage::new(&path));
    let store = SessionStore::new(Arc::clone(&storage) as Arc<dyn SessionStorage>);

    assert!(!store.is_logged_in());
    // The malformed entries were cleared, not just ignored.
    assert_eq!(storage.get("volunteer_jwt").unwrap(), None);
    assert_eq!(storage.get("volunteer_user").unwrap(), None);
}
