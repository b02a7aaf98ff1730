//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once at boot and handed to the HTTP layer and token storage. Values
//! are public (they end up in the WASM bundle); never put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Path prefix shared by every backend endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// `localStorage` key holding the auth token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Client configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash. Empty means same origin.
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_storage_key: TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl AppConfig {
    /// Load config from the `KEYDESK_API_URL` build-time environment variable.
    pub fn load() -> Self {
        Self::from_base_url(option_env!("KEYDESK_API_URL").unwrap_or(""))
    }

    /// Build a config around an explicit backend origin.
    pub fn from_base_url(raw: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(raw),
            ..Self::default()
        }
    }

    /// Absolute (or origin-relative) URL for an API endpoint path such as `/login`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim().trim_start_matches('/');
        format!("{}{API_PREFIX}/{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
