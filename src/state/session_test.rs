use std::cell::RefCell;

use super::*;
use crate::net::types::Role;

/// In-memory stand-in for browser localStorage.
#[derive(Default)]
struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl CredentialStore for MemoryStore {
    fn save(&self, credential: &str) {
        *self.slot.borrow_mut() = Some(credential.to_owned());
    }

    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

fn student() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Priya".to_owned(),
        email: "priya@college.edu".to_owned(),
        role: Role::Student,
    }
}

fn stored(token: &str) -> MemoryStore {
    let store = MemoryStore::default();
    store.save(token);
    store
}

// =============================================================
// Credential store
// =============================================================

#[test]
fn clear_is_idempotent() {
    let store = MemoryStore::default();
    store.save("T");
    store.clear();
    assert!(store.load().is_none());
    store.clear();
    assert!(store.load().is_none());
}

#[test]
fn save_overwrites_existing_credential() {
    let store = stored("old");
    store.save("new");
    assert_eq!(store.load().as_deref(), Some("new"));
}

// =============================================================
// Startup resume
// =============================================================

#[test]
fn new_session_starts_unresolved() {
    let session = Session::new(MemoryStore::default());
    assert_eq!(*session.state(), SessionState::Unresolved);
}

#[test]
fn resume_without_credential_resolves_anonymous_with_no_check() {
    let mut session = Session::new(MemoryStore::default());
    assert!(session.begin_resume().is_none());
    assert_eq!(*session.state(), SessionState::Anonymous);
}

#[test]
fn resume_with_credential_enters_authenticating() {
    let mut session = Session::new(stored("T"));
    assert_eq!(session.begin_resume().as_deref(), Some("T"));
    assert_eq!(*session.state(), SessionState::Authenticating);
}

#[test]
fn successful_check_authenticates_with_server_user() {
    let mut session = Session::new(stored("T"));
    session.begin_resume();
    session.finish_resume(Ok(student()));
    assert_eq!(*session.state(), SessionState::Authenticated(student()));
    // The credential survives a successful resume.
    assert_eq!(session.store.load().as_deref(), Some("T"));
}

#[test]
fn failed_check_resolves_anonymous_and_clears_store() {
    let mut session = Session::new(stored("stale"));
    session.begin_resume();
    session.finish_resume(Err(ApiError::Unauthenticated));
    assert_eq!(*session.state(), SessionState::Anonymous);
    assert!(session.store.load().is_none());
}

#[test]
fn network_failure_during_check_also_clears_store() {
    let mut session = Session::new(stored("T"));
    session.begin_resume();
    session.finish_resume(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(*session.state(), SessionState::Anonymous);
    assert!(session.store.load().is_none());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_saves_token_and_authenticates() {
    let mut session = Session::with_state(MemoryStore::default(), SessionState::Anonymous);
    session.finish_login("T", student());
    assert_eq!(*session.state(), SessionState::Authenticated(student()));
    assert_eq!(session.store.load().as_deref(), Some("T"));
}

#[test]
fn relogin_replaces_principal_and_credential() {
    let mut session = Session::with_state(stored("T1"), SessionState::Authenticated(student()));
    let admin = User {
        id: "u-2".to_owned(),
        name: "Dean".to_owned(),
        email: "dean@college.edu".to_owned(),
        role: Role::Admin,
    };
    session.finish_login("T2", admin.clone());
    assert_eq!(session.state().user(), Some(&admin));
    assert_eq!(session.store.load().as_deref(), Some("T2"));
}

#[test]
fn logout_clears_store_and_drops_to_anonymous() {
    let mut session = Session::with_state(stored("T"), SessionState::Authenticated(student()));
    session.logout();
    assert_eq!(*session.state(), SessionState::Anonymous);
    assert!(session.store.load().is_none());
}

#[test]
fn logout_from_anonymous_is_harmless() {
    let mut session = Session::with_state(MemoryStore::default(), SessionState::Anonymous);
    session.logout();
    assert_eq!(*session.state(), SessionState::Anonymous);
    assert!(session.store.load().is_none());
}

// =============================================================
// State predicates
// =============================================================

#[test]
fn only_terminal_states_are_resolved() {
    assert!(!SessionState::Unresolved.is_resolved());
    assert!(!SessionState::Authenticating.is_resolved());
    assert!(SessionState::Anonymous.is_resolved());
    assert!(SessionState::Authenticated(student()).is_resolved());
}

#[test]
fn user_is_only_readable_when_authenticated() {
    assert!(SessionState::Unresolved.user().is_none());
    assert!(SessionState::Authenticating.user().is_none());
    assert!(SessionState::Anonymous.user().is_none());
    assert_eq!(SessionState::Authenticated(student()).user(), Some(&student()));
}
