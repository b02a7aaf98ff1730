//! Wire DTOs for the `/api/v1` backend.
//!
//! DESIGN
//! ======
//! Every successful response wraps its payload in a `data` envelope. Request
//! bodies borrow their fields so credentials are never cloned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Snapshot of the signed-in user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Missing on older backends; treated as a regular user.
    #[serde(default)]
    pub is_admin: bool,
}

/// `{ "data": ... }` response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// `POST /login` body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /register` body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}
