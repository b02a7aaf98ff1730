//! Reusable UI components shared by pages.

pub mod app_shell;
pub mod route_gate;
