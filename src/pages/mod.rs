//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates layout to
//! `components`. Access control is applied by `RouteGate` in `app`, never
//! inside the page itself.

pub mod ai_provider_keys;
pub mod api_keys;
pub mod dashboard;
pub mod login;
pub mod register;
