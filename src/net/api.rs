//! REST client for the `/api/v1` auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since these endpoints are only reachable from
//! the browser.
//!
//! AUTH HEADERS
//! ============
//! There is no shared default header. Calls that need auth take the bearer
//! token as an argument; the session store is the only caller that owns one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::config::AppConfig;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

/// Maximum number of error body characters surfaced to the UI.
#[cfg(any(test, feature = "csr"))]
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unable to reach the server: {0}")]
    Network(String),
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status of a non-2xx response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Backend operations the session store depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /login`.
    async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthPayload, ApiError>;

    /// `POST /register`.
    async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthPayload, ApiError>;

    /// `POST /logout`, authenticated with `token` when one is known.
    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError>;

    /// Start a [`AuthApi::logout`] call and return at once. The outcome is
    /// only logged.
    fn logout_detached(&self, token: Option<String>);

    /// `GET /user` for the holder of `token`.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

/// [`AuthApi`] backed by browser `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: AppConfig,
}

impl HttpAuthApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest<'_>) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::post_json(&self.config.endpoint("/login"), request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::post_json(&self.config.endpoint("/register"), request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::post_empty(&self.config.endpoint("/logout"), token).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, token);
            Err(ApiError::Unavailable)
        }
    }

    fn logout_detached(&self, token: Option<String>) {
        #[cfg(feature = "csr")]
        {
            let api = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = api.logout(token.as_deref()).await {
                    log::debug!("logout notification failed: {err}");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::get_json(&self.config.endpoint("/user"), token).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, token);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// User-facing message for a non-2xx response body.
///
/// Prefers the JSON `message` field, then the trimmed raw body.
#[cfg(any(test, feature = "csr"))]
fn error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .map(|message| message.trim().to_owned())
        .filter(|message| !message.is_empty());
    if let Some(message) = from_json {
        return message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header, error_message};
    use crate::net::types::Envelope;

    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
        let request = Request::post(url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_envelope(response).await
    }

    pub(super) async fn get_json<T: DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
        let response = with_bearer(Request::get(url), Some(token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_envelope(response).await
    }

    pub(super) async fn post_empty(url: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = with_bearer(Request::post(url), token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            return Ok(());
        }
        Err(http_error(response).await)
    }

    fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &bearer_header(token)),
            None => builder,
        }
    }

    async fn decode_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(http_error(response).await);
        }
        response
            .json::<Envelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn http_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::Http {
            status,
            message: error_message(&body),
        }
    }
}
