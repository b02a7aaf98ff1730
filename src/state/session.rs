//! The current authentication state held by the client.
//!
//! INVARIANTS
//! ==========
//! `user` is only meaningful while `token` is present. Derived flags are
//! computed from the stored fields on every read and never stored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// A signed-in session. An empty token yields a signed-out session.
    pub fn authenticated(token: String, user: User) -> Self {
        if token.is_empty() {
            return Self::default();
        }
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|user| user.is_admin)
    }

    /// The signed-in user, hidden once the token is gone.
    pub fn current_user(&self) -> Option<&User> {
        if self.is_authenticated() { self.user.as_ref() } else { None }
    }
}
