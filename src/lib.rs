//! # keydesk
//!
//! Leptos + WASM front end for the API-key management backend.
//!
//! This crate contains the session store (token persistence, login,
//! registration, logout, restore), the static route table with its
//! navigation guard, and the thin pages those guard.
//!
//! BOOT ORDER
//! ==========
//! `start` restores the persisted session first and mounts the router only
//! once that finished, so no guard decision is ever made against a session
//! that is still loading.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Browser entry point: install logging, restore the session, mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::AppConfig;
    use crate::net::api::HttpAuthApi;
    use crate::state::auth::{AuthStore, RestoreOutcome};
    use crate::util::token_storage::LocalTokenStorage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::load();
    log::info!("api base url: {:?}", config.api_base_url);

    let storage = LocalTokenStorage::new(config.token_storage_key.clone());
    let auth = AuthStore::new(HttpAuthApi::new(config), storage);

    wasm_bindgen_futures::spawn_local(async move {
        match auth.restore_session().await {
            RestoreOutcome::NoSession => log::debug!("no stored session"),
            RestoreOutcome::Restored => log::info!("session restored"),
            RestoreOutcome::Cleared(reason) => log::info!("session cleared: {reason}"),
        }
        leptos::mount::mount_to_body(move || view! { <App auth=auth/> });
    });
}
