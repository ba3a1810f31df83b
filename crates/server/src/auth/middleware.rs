use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt::validate_access_token;
use super::Identity;
use crate::backend::{AuthSession, BackendClient};
use shared_types::{AppError, AppErrorKind};

/// Permissive auth middleware that handles authentication and cookie management.
///
/// On each request:
/// 1. Validates the access token from cookies (or Bearer header fallback)
/// 2. If missing or expired, redeems the refresh cookie with the backend.
///    Cookies are cleared only when the backend rejects the refresh token;
///    an unreachable backend leaves them in place for the next request.
/// 3. Inserts a `CookieSlot` so server functions can schedule cookie changes
/// 4. After the handler runs, applies any pending cookie actions to the response
///
/// Does NOT reject unauthenticated requests. Server functions decide authorization.
pub async fn auth_middleware(
    State(client): State<BackendClient>,
    mut req: Request,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let secret = client.settings().jwt_secret.clone();
    let mut refreshed: Option<AuthSession> = None;
    let mut stale_refresh = false;

    let access_token = cookies::extract_access_token(&headers);
    let mut needs_refresh = access_token.is_none();

    if let Some(token) = access_token {
        match validate_access_token(&token, &secret) {
            Ok(claims) => {
                req.extensions_mut().insert(Identity {
                    claims,
                    access_token: token,
                });
            }
            Err(_) => needs_refresh = true,
        }
    }

    if needs_refresh {
        if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
            match try_transparent_refresh(&client, &secret, &refresh_token, &mut req).await {
                Ok(session) => refreshed = Some(session),
                Err(e) if e.kind == AppErrorKind::Unauthorized => {
                    tracing::info!("Refresh token rejected, clearing auth cookies");
                    stale_refresh = true;
                }
                Err(e) => {
                    tracing::warn!(kind = %e.kind, error = %e.message, "Refresh failed, continuing anonymously");
                }
            }
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(session) = &refreshed {
        cookies::set_auth_cookies(response.headers_mut(), session);
    } else if stale_refresh {
        cookies::clear_auth_cookies(response.headers_mut());
    }

    // Actions scheduled by server functions win over the refresh outcome
    if let Some(action) = cookie_slot.take() {
        match action {
            PendingCookieAction::Set(session) => {
                cookies::set_auth_cookies(response.headers_mut(), &session);
            }
            PendingCookieAction::Clear => {
                cookies::clear_auth_cookies(response.headers_mut());
            }
        }
    }

    response
}

/// Redeem the refresh token with the backend. On success inserts the new
/// identity into request extensions and returns the session for the
/// middleware to store as cookies.
async fn try_transparent_refresh(
    client: &BackendClient,
    secret: &str,
    refresh_token: &str,
    req: &mut Request,
) -> Result<AuthSession, AppError> {
    let session = client.refresh_session(refresh_token).await?;

    let claims = validate_access_token(&session.access_token, secret).map_err(|e| {
        tracing::error!(%e, "Backend issued an access token that fails validation");
        AppError::internal("refreshed access token failed validation")
    })?;

    req.extensions_mut().insert(Identity {
        claims,
        access_token: session.access_token.clone(),
    });
    Ok(session)
}
