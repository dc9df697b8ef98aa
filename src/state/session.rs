//! Session state machine: bootstrap, login, registration, and logout.
//!
//! The machine is sans-IO. Network calls happen outside and feed their
//! outcome back in through `finish_*`, so every transition is a synchronous
//! method and the whole lifecycle runs under plain `cargo test` with an
//! in-memory credential store. The async functions at the bottom wire the
//! machine to the browser store, the auth client, and the reactive session
//! signal provided by `App`.
//!
//! LIFECYCLE
//! =========
//! `Unresolved` -> `Authenticating` -> `Authenticated` | `Anonymous`.
//! Exactly one silent session check runs per page load, at startup. After
//! resolution only explicit login/logout transitions change state; a failed
//! login leaves state untouched and surfaces its error to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{GetUntracked, RwSignal, Set};

use crate::net::error::ApiError;
use crate::net::types::{RegisterPayload, User};
use crate::util::token_store::BrowserStore;

/// Where the credential lives between page loads.
///
/// The browser implementation is [`BrowserStore`]; tests substitute an
/// in-memory fake.
pub trait CredentialStore {
    /// Overwrite any existing credential.
    fn save(&self, credential: &str);
    fn load(&self) -> Option<String>;
    /// Remove the credential. Idempotent.
    fn clear(&self);
}

/// Authentication state for the lifetime of the page.
///
/// Invariant: `Authenticated(p)` holds exactly when a credential is stored
/// and the server returned `p` for it. Consumers must not read the user
/// while the state is `Unresolved` or `Authenticating`; the application
/// shell withholds rendering until resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Startup: the stored credential has not been looked at yet.
    #[default]
    Unresolved,
    /// A stored credential is being checked against the server.
    Authenticating,
    /// The server vouched for the credential.
    Authenticated(User),
    /// No session. Terminal until an explicit login.
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True once the startup check has finished either way.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Authenticated(_) | Self::Anonymous)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// The session state machine, owning the state slot and the credential
/// store.
pub struct Session<S: CredentialStore> {
    state: SessionState,
    store: S,
}

impl<S: CredentialStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: SessionState::Unresolved,
            store,
        }
    }

    /// Rebuild the machine around an already-resolved state.
    pub fn with_state(store: S, state: SessionState) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Start the silent re-authentication check.
    ///
    /// Returns the stored credential to verify, or `None` when nothing is
    /// stored — the session then resolves to `Anonymous` immediately and
    /// no network call may be made.
    pub fn begin_resume(&mut self) -> Option<String> {
        match self.store.load() {
            Some(token) => {
                self.state = SessionState::Authenticating;
                Some(token)
            }
            None => {
                self.state = SessionState::Anonymous;
                None
            }
        }
    }

    /// Apply the outcome of the startup check.
    ///
    /// Failure here is expected (expired or revoked token): the session
    /// resolves to `Anonymous` and the stale credential is removed. It is
    /// never surfaced to the user.
    pub fn finish_resume(&mut self, outcome: Result<User, ApiError>) {
        match outcome {
            Ok(user) => self.state = SessionState::Authenticated(user),
            Err(_) => {
                self.store.clear();
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// Apply a successful login or registration.
    pub fn finish_login(&mut self, token: &str, user: User) {
        self.store.save(token);
        self.state = SessionState::Authenticated(user);
    }

    /// Drop the session and its stored credential.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state = SessionState::Anonymous;
    }
}

/// Run the once-per-page-load session bootstrap against the browser store.
pub async fn resume(session: RwSignal<SessionState>) {
    let mut machine = Session::new(BrowserStore);
    if let Some(token) = machine.begin_resume() {
        session.set(machine.state().clone());
        let outcome = crate::net::auth::current_user(&token).await;
        if outcome.is_err() {
            leptos::logging::warn!("session resume failed; clearing stored credential");
        }
        machine.finish_resume(outcome);
    }
    session.set(machine.into_state());
}

/// Log in and update the shared session signal.
///
/// # Errors
///
/// Passes through the auth client's typed error; session state and the
/// stored credential are only touched on success.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let granted = crate::net::auth::login(email, password).await?;
    let mut machine = Session::with_state(BrowserStore, session.get_untracked());
    machine.finish_login(&granted.token, granted.user.clone());
    session.set(machine.into_state());
    Ok(granted.user)
}

/// Register a new account and update the shared session signal.
///
/// # Errors
///
/// Passes through the auth client's typed error; session state and the
/// stored credential are only touched on success.
pub async fn register(
    session: RwSignal<SessionState>,
    payload: &RegisterPayload,
) -> Result<User, ApiError> {
    let granted = crate::net::auth::register(payload).await?;
    let mut machine = Session::with_state(BrowserStore, session.get_untracked());
    machine.finish_login(&granted.token, granted.user.clone());
    session.set(machine.into_state());
    Ok(granted.user)
}

/// Log out: clear the stored credential and drop to `Anonymous`.
pub fn logout(session: RwSignal<SessionState>) {
    let mut machine = Session::with_state(BrowserStore, session.get_untracked());
    machine.logout();
    session.set(machine.into_state());
}
