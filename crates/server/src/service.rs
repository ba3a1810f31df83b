//! Bodies of the server functions, written against an explicit backend
//! client and caller identity. `api` supplies both from the request.

use shared_types::{
    AppError, EquipmentWithType, Inspection, Issue, Profile, ReportIssueRequest, Role,
    SignInRequest, SubmitInspectionRequest,
};

use crate::auth::Identity;
use crate::backend::{AuthSession, BackendClient};
use crate::error_convert::ValidateRequest;
use crate::rate_limit::{sign_in_key, RateLimitState};
use crate::repo;

/// Outcome of a session lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    Anonymous,
    SignedIn(Profile),
    /// The token is valid but its profile row is gone; cookies should be cleared.
    MissingProfile,
}

/// Profile of the caller, when there is one.
pub async fn current_profile(
    client: &BackendClient,
    identity: Option<&Identity>,
) -> Result<SessionLookup, AppError> {
    let Some(identity) = identity else {
        return Ok(SessionLookup::Anonymous);
    };

    let profile =
        repo::profile::find_by_id(client, &identity.access_token, identity.user_id()).await?;
    Ok(match profile {
        Some(profile) => SessionLookup::SignedIn(profile),
        None => {
            tracing::warn!(user_id = %identity.user_id(), "Session references a missing profile");
            SessionLookup::MissingProfile
        }
    })
}

/// Require `identity` to hold `role`. The role is read from the profile row,
/// never from the client.
pub async fn require_role(
    client: &BackendClient,
    identity: &Identity,
    role: Role,
) -> Result<Profile, AppError> {
    let profile = repo::profile::find_by_id(client, &identity.access_token, identity.user_id())
        .await?
        .ok_or_else(|| AppError::unauthorized("Profile not found"))?;

    if profile.role != role {
        tracing::warn!(user_id = %profile.id, held = %profile.role, required = %role, "Role check failed");
        return Err(AppError::forbidden(format!("{} role required", role.as_str())));
    }
    Ok(profile)
}

/// Password sign-in. Returns the session for the caller to store as cookies
/// together with the signed-in profile.
pub async fn sign_in(
    client: &BackendClient,
    limiter: &RateLimitState,
    email: &str,
    password: String,
) -> Result<(AuthSession, Profile), AppError> {
    let req = SignInRequest {
        email: email.trim().to_string(),
        password,
    };
    req.validate_request()?;

    let key = sign_in_key(&req.email);
    if !limiter.check(&key) {
        tracing::warn!(email = %key, "Sign-in rate limited");
        return Err(AppError::rate_limited("Too many sign-in attempts"));
    }

    let session = client.sign_in_with_password(&req.email, &req.password).await?;
    let profile =
        repo::profile::find_by_id(client, &session.access_token, session.user.id).await?;

    let Some(profile) = profile else {
        // Account without a profile row cannot use the dashboard
        if let Err(e) = client.sign_out(&session.access_token).await {
            tracing::warn!(kind = %e.kind, "Failed to revoke session for profileless account");
        }
        return Err(AppError::forbidden("Profile not found"));
    };

    limiter.reset(&key);
    tracing::info!(user_id = %profile.id, role = %profile.role, "Signed in");
    Ok((session, profile))
}

/// Revoke the caller's backend session. Failures are logged, never returned.
pub async fn sign_out(client: &BackendClient, identity: Option<&Identity>) {
    if let Some(identity) = identity {
        if let Err(e) = client.sign_out(&identity.access_token).await {
            tracing::warn!(kind = %e.kind, "Backend sign-out failed, clearing cookies anyway");
        }
    }
}

pub async fn list_my_equipment(
    client: &BackendClient,
    identity: &Identity,
) -> Result<Vec<EquipmentWithType>, AppError> {
    let profile = require_role(client, identity, Role::Worker).await?;
    repo::equipment::list_for_user(client, &identity.access_token, profile.id).await
}

pub async fn submit_inspection(
    client: &BackendClient,
    identity: &Identity,
    req: SubmitInspectionRequest,
) -> Result<Inspection, AppError> {
    let profile = require_role(client, identity, Role::Worker).await?;
    repo::inspection::create(client, &identity.access_token, profile.id, req).await
}

pub async fn report_issue(
    client: &BackendClient,
    identity: &Identity,
    req: ReportIssueRequest,
) -> Result<Issue, AppError> {
    req.validate_request()?;
    let profile = require_role(client, identity, Role::Worker).await?;
    repo::issue::create(client, &identity.access_token, profile.id, req).await
}

/// Every user profile. Admin only.
pub async fn list_profiles(
    client: &BackendClient,
    identity: &Identity,
) -> Result<Vec<Profile>, AppError> {
    require_role(client, identity, Role::Admin).await?;
    repo::profile::list_all(client, &identity.access_token).await
}
