use dioxus::prelude::*;
use shared_types::{
    EquipmentWithType, Inspection, Issue, Profile, ReportIssueRequest, SubmitInspectionRequest,
};

#[cfg(feature = "server")]
use crate::backend::client;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::service::{self, SessionLookup};

#[cfg(feature = "server")]
use shared_types::AppError;

#[cfg(feature = "server")]
use crate::auth::Identity;

// ── Auth helpers for server functions ──────────────────

/// Identity injected by the auth middleware, falling back to validating the
/// access cookie directly when the middleware did not run.
#[cfg(feature = "server")]
fn current_identity() -> Option<Identity> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(identity) = parts.extensions.get::<Identity>() {
        return Some(identity.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)?;
    let claims = jwt::validate_access_token(&token, &client().settings().jwt_secret).ok()?;
    Some(Identity {
        claims,
        access_token: token,
    })
}

#[cfg(feature = "server")]
fn require_auth() -> Result<Identity, ServerFnError> {
    current_identity()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

// ── Session ─────────────────────────────────────────────

/// Profile of the signed-in user, or `None` when there is no valid session.
///
/// Clears stale auth cookies when the token is valid but the profile is gone.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_profile() -> Result<Option<Profile>, ServerFnError> {
    let identity = current_identity();
    let lookup = service::current_profile(client(), identity.as_ref())
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(match lookup {
        SessionLookup::SignedIn(profile) => Some(profile),
        SessionLookup::Anonymous => None,
        SessionLookup::MissingProfile => {
            crate::auth::cookies::schedule_clear_cookies();
            None
        }
    })
}

/// Sign in with email and password. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn sign_in(email: String, password: String) -> Result<Profile, ServerFnError> {
    let limiter = crate::rate_limit::sign_in_limiter();
    let (session, profile) = service::sign_in(client(), limiter, &email, password)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    crate::auth::cookies::schedule_auth_cookies(&session);
    Ok(profile)
}

/// Revoke the backend session (best effort) and clear auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn sign_out() -> Result<(), ServerFnError> {
    service::sign_out(client(), current_identity().as_ref()).await;
    crate::auth::cookies::schedule_clear_cookies();
    Ok(())
}

// ── Worker ──────────────────────────────────────────────

/// Equipment assigned to the calling worker, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_equipment() -> Result<Vec<EquipmentWithType>, ServerFnError> {
    let identity = require_auth()?;
    service::list_my_equipment(client(), &identity)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Record a daily inspection as the calling worker.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn submit_inspection(req: SubmitInspectionRequest) -> Result<Inspection, ServerFnError> {
    let identity = require_auth()?;
    service::submit_inspection(client(), &identity, req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Report a problem with a piece of equipment as the calling worker.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn report_issue(req: ReportIssueRequest) -> Result<Issue, ServerFnError> {
    let identity = require_auth()?;
    service::report_issue(client(), &identity, req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

// ── Admin ───────────────────────────────────────────────

/// Every user profile. Admin only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_profiles() -> Result<Vec<Profile>, ServerFnError> {
    let identity = require_auth()?;
    service::list_profiles(client(), &identity)
        .await
        .map_err(|e| e.into_server_fn_error())
}
