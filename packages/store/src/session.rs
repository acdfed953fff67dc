//! # Session store — who is logged in
//!
//! Two phases, [`SessionPhase::Anonymous`] (initial) and
//! [`SessionPhase::Authenticated`]. The phase is derived from whether a [`User`] is
//! held, so "authenticated" and "has a user" cannot disagree.
//!
//! | Operation | Success | Failure |
//! |-----------|---------|---------|
//! | [`login`](SessionStore::login) | user from the payload → Authenticated | `error` = server detail or [`LOGIN_FAILED`], user cleared → Anonymous |
//! | [`register`](SessionStore::register) | same as login | `error` = server detail or [`REGISTER_FAILED`] |
//! | [`logout`](SessionStore::logout) | user cleared → Anonymous | session kept, `error` = detail or [`LOGOUT_FAILED`], error returned |
//!
//! `login` and `register` set `loading` for their whole duration and clear `error`
//! when they start.

use std::future::Future;
use std::rc::Rc;

use api::{ApiError, AuthPayload, Backend, User};

use crate::watch::Watched;

pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGOUT_FAILED: &str = "Logout failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

/// Snapshot of the session store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }
}

/// Holds the current user and runs the auth calls against a [`Backend`].
pub struct SessionStore<B> {
    backend: Rc<B>,
    state: Watched<SessionState>,
}

impl<B> Clone for SessionStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            state: self.state.clone(),
        }
    }
}

impl<B: Backend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Rc::new(backend),
            state: Watched::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read(SessionState::is_authenticated)
    }

    /// Call `listener` with the new state after every change.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        self.state.subscribe(listener);
    }

    pub async fn login(&self, username: &str, password: &str) {
        tracing::debug!("Logging in as {}", username);
        let attempt = self.backend.login(username, password);
        self.authenticate(attempt, LOGIN_FAILED).await;
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) {
        tracing::debug!("Registering {}", username);
        let attempt = self.backend.register(username, email, password);
        self.authenticate(attempt, REGISTER_FAILED).await;
    }

    /// End the session on the server, then locally.
    ///
    /// If the server call fails the user stays logged in.
    pub async fn logout(&self) -> Result<(), ApiError> {
        match self.backend.logout().await {
            Ok(()) => {
                self.state.update(|s| {
                    s.user = None;
                    s.error = None;
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Logout failed: {}", e);
                let message = e.user_message(LOGOUT_FAILED);
                self.state.update(|s| s.error = Some(message));
                Err(e)
            }
        }
    }

    async fn authenticate(
        &self,
        attempt: impl Future<Output = Result<AuthPayload, ApiError>>,
        fallback: &str,
    ) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = attempt.await;

        self.state.update(|s| {
            match result {
                Ok(payload) => {
                    let user = payload.into_user();
                    tracing::info!("Authenticated as {}", user.username);
                    s.user = Some(user);
                }
                Err(e) => {
                    tracing::debug!("Authentication failed: {}", e);
                    s.user = None;
                    s.error = Some(e.user_message(fallback));
                }
            }
            s.loading = false;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{MemoryBackend, Request};
    use std::cell::RefCell;

    fn backend() -> MemoryBackend {
        MemoryBackend::new().with_account("alice", None, "x")
    }

    fn assert_consistent(state: &SessionState) {
        assert_eq!(state.is_authenticated(), state.user().is_some());
    }

    #[tokio::test]
    async fn test_login_success() {
        let store = SessionStore::new(backend());
        assert_eq!(store.state().phase(), SessionPhase::Anonymous);

        store.login("alice", "x").await;

        let state = store.state();
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
        assert!(state.is_authenticated());
        assert_eq!(state.error, None);
        assert!(!state.loading);
        assert_eq!(state.phase(), SessionPhase::Authenticated);
    }

    #[tokio::test]
    async fn test_login_uses_server_detail() {
        let backend = backend();
        backend.fail_next(ApiError::Http {
            status: 400,
            detail: Some("bad password".to_string()),
        });
        let store = SessionStore::new(backend);

        store.login("alice", "x").await;

        let state = store.state();
        assert_eq!(state.error.as_deref(), Some("bad password"));
        assert!(!state.is_authenticated());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_login_network_error_uses_fallback() {
        let backend = backend();
        backend.fail_next(ApiError::Network("connection refused".to_string()));
        let store = SessionStore::new(backend);

        store.login("alice", "x").await;

        let state = store.state();
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_drops_previous_user() {
        let store = SessionStore::new(backend());
        store.login("alice", "x").await;
        store.login("alice", "wrong").await;

        let state = store.state();
        assert_eq!(state.user(), None);
        assert_eq!(state.error.as_deref(), Some("Invalid username or password."));
    }

    #[tokio::test]
    async fn test_register_failure_without_detail() {
        let store = SessionStore::new(backend());
        store.register("alice", "alice@example.com", "pw").await;

        let state = store.state();
        assert_eq!(state.error.as_deref(), Some("Registration failed"));
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let backend = backend();
        let store = SessionStore::new(backend.clone());

        store.register("bob", "bob@example.com", "pw").await;
        let state = store.state();
        assert_eq!(
            state.user(),
            Some(&User::new("bob").with_email("bob@example.com"))
        );

        store.logout().await.unwrap();
        assert_eq!(store.state().phase(), SessionPhase::Anonymous);
        assert_eq!(backend.requests().last(), Some(&Request::Logout));
        assert_eq!(backend.session_user(), None);
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_session() {
        let backend = backend();
        let store = SessionStore::new(backend.clone());
        store.login("alice", "x").await;

        backend.fail_next(ApiError::Network("offline".to_string()));
        let result = store.logout().await;

        assert!(result.is_err());
        let state = store.state();
        assert!(state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Logout failed"));
    }

    #[tokio::test]
    async fn test_listeners_see_loading_and_consistent_states() {
        let store = SessionStore::new(backend());
        let seen: Rc<RefCell<Vec<SessionState>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |s| sink.borrow_mut().push(s.clone()));

        store.login("alice", "x").await;
        store.login("alice", "nope").await;
        store.logout().await.unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 5);
        assert!(seen[0].loading && seen[0].error.is_none());
        assert!(!seen[1].loading && seen[1].is_authenticated());
        assert!(seen[2].loading);
        assert!(!seen[3].is_authenticated() && seen[3].error.is_some());
        assert!(!seen[4].is_authenticated());
        seen.iter().for_each(assert_consistent);
    }
}
