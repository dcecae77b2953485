//! Session state and the session service.
//!
//! [`Session`] is the plain model: the current user, the bearer token,
//! and a `loading` flag that stays `true` only until restoration from
//! durable storage has been attempted. [`SessionStore`] is the explicit
//! service handed to views via context; it owns the only two mutations
//! (login, logout) and keeps memory and `localStorage` in step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{LoginResponse, User};
use crate::util::storage;

/// Current authentication state.
///
/// Invariant: `user` and `token` are set and cleared together; the only
/// mutators are [`Session::apply_login`] and [`Session::clear`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for Session {
    /// A fresh session is "resolution pending" until restore runs.
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn apply_login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Fold a login attempt into the session: success replaces the
    /// `{user, token}` pair, failure leaves prior state untouched.
    ///
    /// # Errors
    ///
    /// Passes the attempt's error through unchanged.
    pub fn resolve_login(&mut self, outcome: Result<LoginResponse, ApiError>) -> Result<(), ApiError> {
        let resp = outcome?;
        self.apply_login(resp.user, resp.token);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Dependency-injected session service.
///
/// Created once in `App` and provided via context; pages read it with
/// `expect_context::<SessionStore>()` instead of touching globals.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<Session>,
}

impl SessionStore {
    /// Restore-or-empty startup: read durable storage synchronously
    /// before the first render decision. Restoration failure is treated
    /// as "no session", never fatal.
    pub fn init() -> Self {
        let mut session = Session::default();
        if let Some((token, user)) = storage::read_session() {
            session.apply_login(user, token);
        }
        session.loading = false;
        Self {
            state: RwSignal::new(session),
        }
    }

    /// Reactive read of the full session.
    pub fn get(&self) -> Session {
        self.state.get()
    }

    pub fn user(&self) -> Option<User> {
        self.state.get().user
    }

    pub fn token(&self) -> Option<String> {
        self.state.get().token
    }

    /// Authenticate against the backend. On success the new `{user,
    /// token}` pair lands in memory and durable storage together; on
    /// failure prior state is left untouched and the error propagates
    /// for inline display.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection or a transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let outcome = api::login(email, password).await;
        if let Ok(resp) = &outcome {
            storage::write_session(&resp.token, &resp.user);
        }
        let mut result = Ok(());
        self.state.update(|s| result = s.resolve_login(outcome));
        result
    }

    /// Clear in-memory and durable session state together.
    pub fn logout(&self) {
        storage::clear_session();
        self.state.update(Session::clear);
    }
}
