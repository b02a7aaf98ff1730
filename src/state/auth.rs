//! Session store: the single owner of the auth token and current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Restored once before the router mounts, then read by route gates and
//! pages through Leptos context. Pages call `login`/`register`/`logout`;
//! nothing else writes the session.
//!
//! ERROR HANDLING
//! ==============
//! Login and registration failures surface as [`AuthError`] and leave the
//! session untouched. An invalid stored token is only ever reported through
//! [`RestoreOutcome`]; the user just lands signed out. Logout never fails
//! and never waits on the network.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::Session;
use crate::net::api::{ApiError, AuthApi, HttpAuthApi};
use crate::net::types::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::util::token_storage::{LocalTokenStorage, TokenStorage};

/// Login/registration failure shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend refused the credentials or the submitted form.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Transport(ApiError),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http { status, message } if (400..500).contains(&status) => Self::Rejected { status, message },
            other => Self::Transport(other),
        }
    }
}

/// The persisted token could not be turned back into a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("stored session is no longer valid: {0}")]
pub struct SessionInvalid(pub ApiError);

/// Result of the startup restore attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Nothing was persisted; the session stays empty.
    NoSession,
    Restored,
    /// The stored token was rejected and everything was cleared.
    Cleared(SessionInvalid),
}

/// Store wired to the browser backend and `localStorage`.
pub type AppAuth = AuthStore<HttpAuthApi, LocalTokenStorage>;

#[derive(Clone)]
pub struct AuthStore<A, S> {
    api: A,
    storage: S,
    session: RwSignal<Session>,
}

impl<A, S> AuthStore<A, S>
where
    A: AuthApi,
    S: TokenStorage,
{
    /// New store with an empty session. Call [`Self::restore_session`] once at boot.
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            storage,
            session: RwSignal::new(Session::default()),
        }
    }

    /// Reactive read access to the session.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(Session::is_admin)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|session| session.current_user().cloned())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|session| session.token.clone())
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the backend refuses the
    /// credentials, or [`AuthError::Transport`] when it can't be reached or
    /// answers with something unusable.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let payload = self.api.login(&LoginRequest { email, password }).await?;
        self.establish(payload)
    }

    /// Create an account and sign in with it.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str, confirmation: &str) -> Result<(), AuthError> {
        let request = RegisterRequest {
            name,
            email,
            password,
            password_confirmation: confirmation,
        };
        let payload = self.api.register(&request).await?;
        self.establish(payload)
    }

    /// Clear the session locally, then tell the backend once.
    ///
    /// The notification is detached: this returns before the backend answers,
    /// and its outcome is only logged.
    pub fn logout(&self) {
        let token = self
            .session
            .with_untracked(|session| session.token.clone())
            .or_else(|| self.storage.load());
        self.clear();
        self.api.logout_detached(token);
    }

    /// Rehydrate the session from the persisted token, if any.
    pub async fn restore_session(&self) -> RestoreOutcome {
        let Some(token) = self.storage.load() else {
            return RestoreOutcome::NoSession;
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                self.session.set(Session::authenticated(token, user));
                RestoreOutcome::Restored
            }
            Err(err) => {
                log::info!("discarding stored session: {err}");
                self.logout();
                RestoreOutcome::Cleared(SessionInvalid(err))
            }
        }
    }

    fn establish(&self, payload: AuthPayload) -> Result<(), AuthError> {
        if payload.token.is_empty() {
            return Err(AuthError::Transport(ApiError::Decode("response carried an empty token".to_owned())));
        }
        log::info!("signed in as user {}", payload.user.id);
        self.storage.store(&payload.token);
        self.session.set(Session::authenticated(payload.token, payload.user));
        Ok(())
    }

    fn clear(&self) {
        self.storage.clear();
        self.session.set(Session::default());
    }
}
