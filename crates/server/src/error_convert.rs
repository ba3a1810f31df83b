use dioxus::prelude::ServerFnError;
use reqwest::StatusCode;
use shared_types::AppError;

/// Which backend surface produced a non-success response. Status codes mean
/// different things on the token endpoint and on the REST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendScope {
    /// `POST /auth/v1/token` (password or refresh grant).
    TokenGrant,
    /// Other `/auth/v1/*` calls.
    Auth,
    /// `/rest/v1/*` table access.
    Rest,
}

/// Map a non-success backend status into an AppError.
pub fn status_to_app_error(status: StatusCode, body: &str, scope: BackendScope) -> AppError {
    match (scope, status.as_u16()) {
        (BackendScope::TokenGrant, 400 | 401 | 422) => {
            AppError::unauthorized("Invalid email or password")
        }
        (BackendScope::Rest | BackendScope::Auth, 401) => {
            AppError::unauthorized("Session is missing or expired")
        }
        (BackendScope::Rest, 403) => AppError::forbidden("Access denied by row-level policy"),
        _ => AppError::upstream(format!("backend returned {status}: {}", snippet(body))),
    }
}

/// First line of an error body, capped so logs stay readable.
fn snippet(body: &str) -> &str {
    let line = body.lines().next().unwrap_or("").trim();
    match line.char_indices().nth(200) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// Convert a transport-level reqwest failure into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::upstream("backend request timed out")
    } else {
        AppError::upstream(format!("backend request failed: {err}"))
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
