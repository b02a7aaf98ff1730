//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the plain data model; `auth` owns it behind a signal and
//! performs the network operations that change it.

pub mod auth;
pub mod session;
