//! HTTP client for the hosted backend (Supabase-compatible auth and REST).
//!
//! Every request carries the project's anon key as `apikey`. Calls made on
//! behalf of a user carry the user's access token as the bearer, so row-level
//! policies on the backend decide what the user may read or write.

pub mod auth;
pub mod rest;

use reqwest::{Method, RequestBuilder, Response};
use shared_types::AppError;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::error_convert::{status_to_app_error, BackendScope, ReqwestErrorExt};

pub use auth::{AuthSession, AuthUser};
pub use rest::{Direction, Select};

/// Connection settings for the backend project.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
    /// HS256 secret used to verify access tokens locally.
    pub jwt_secret: String,
    pub request_timeout: Duration,
}

impl BackendSettings {
    /// Read settings from the environment (and `.env` when present).
    ///
    /// Panics when a required variable is missing; the server cannot start
    /// without a backend.
    pub fn from_env() -> Self {
        // Load .env file if present (ignored in production where env vars are set directly).
        let _ = dotenvy::dotenv();

        let url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let anon_key = std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");
        let jwt_secret =
            std::env::var("SUPABASE_JWT_SECRET").expect("SUPABASE_JWT_SECRET must be set");

        Self {
            url,
            anon_key,
            jwt_secret,
            request_timeout: Duration::from_secs(
                crate::config::backend_config().request_timeout_secs,
            ),
        }
    }
}

/// Cheap-to-clone handle to the backend. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    settings: Arc<BackendSettings>,
}

impl BackendClient {
    pub fn new(settings: BackendSettings) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(ReqwestErrorExt::into_app_error)?;
        Ok(Self {
            http,
            settings: Arc::new(settings),
        })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.settings.url.trim_end_matches('/'), path)
    }

    /// Start a request with the project headers. Without a user token the
    /// anon key doubles as the bearer.
    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> RequestBuilder {
        let bearer = access_token.unwrap_or(&self.settings.anon_key);
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.settings.anon_key)
            .bearer_auth(bearer)
    }

    /// Send and turn any non-success status into an AppError.
    async fn send(&self, builder: RequestBuilder, scope: BackendScope) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(ReqwestErrorExt::into_app_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = status_to_app_error(status, &body, scope);
        tracing::warn!(%status, kind = %err.kind, "Backend request rejected");
        Err(err)
    }

    /// Read a JSON body, reporting shape mismatches as internal errors.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
        what: &str,
    ) -> Result<T, AppError> {
        let body = response.text().await.map_err(ReqwestErrorExt::into_app_error)?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::internal(format!("unexpected {what} payload: {e}")))
    }
}

static CLIENT: OnceLock<BackendClient> = OnceLock::new();

/// Get or initialize the process-wide backend client.
///
/// Used by Dioxus server functions. The auth middleware and health handler
/// receive a clone through axum `State` instead.
pub fn client() -> &'static BackendClient {
    CLIENT.get_or_init(|| {
        BackendClient::new(BackendSettings::from_env()).expect("Failed to build backend HTTP client")
    })
}
