use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared_types::AppError;
use uuid::Uuid;

use super::BackendClient;
use crate::error_convert::BackendScope;

/// Token pair issued by the backend's auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

impl BackendClient {
    /// Exchange email and password for a session.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AppError> {
        self.token_grant("password", json!({ "email": email, "password": password }))
            .await
    }

    /// Exchange a refresh token for a new session. The old refresh token is
    /// consumed by the backend.
    #[tracing::instrument(skip_all)]
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        self.token_grant("refresh_token", json!({ "refresh_token": refresh_token }))
            .await
    }

    async fn token_grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<AuthSession, AppError> {
        let builder = self
            .request(Method::POST, "/auth/v1/token", None)
            .query(&[("grant_type", grant_type)])
            .json(&body);
        let response = self.send(builder, BackendScope::TokenGrant).await?;
        Self::decode(response, "session").await
    }

    /// Revoke the session behind `access_token`.
    #[tracing::instrument(skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let builder = self.request(Method::POST, "/auth/v1/logout", Some(access_token));
        self.send(builder, BackendScope::Auth).await?;
        Ok(())
    }

    /// Probe the auth service.
    pub async fn health(&self) -> Result<(), AppError> {
        let builder = self.request(Method::GET, "/auth/v1/health", None);
        self.send(builder, BackendScope::Auth).await?;
        Ok(())
    }
}
