//! Client-side routing: the static route table and the navigation guard.
//!
//! ARCHITECTURE
//! ============
//! Both modules are plain data and pure functions. The Leptos glue that
//! applies guard decisions lives in `components::route_gate`.

pub mod guard;
pub mod routes;
