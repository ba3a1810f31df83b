use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex};

use crate::backend::AuthSession;

pub const PPE_ACCESS: &str = "ppe_access";
pub const PPE_REFRESH: &str = "ppe_refresh";

/// Refresh cookie lifetime. The backend decides whether the token is still
/// redeemable; this only bounds how long the browser keeps it.
const REFRESH_MAX_AGE_DAYS: i64 = 30;

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

/// Percent-encoded Set-Cookie value. `None` only when `COOKIE_DOMAIN` holds
/// bytes a header cannot carry.
fn build_cookie(
    name: &'static str,
    value: &str,
    max_age: cookie::time::Duration,
) -> Option<HeaderValue> {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    let encoded = cookie.build().encoded().to_string();
    match HeaderValue::from_str(&encoded) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!(%e, cookie = name, "Unrepresentable Set-Cookie header");
            None
        }
    }
}

/// Build a Set-Cookie header value for the access token.
pub fn build_access_cookie(token: &str, max_age_secs: i64) -> Option<HeaderValue> {
    build_cookie(
        PPE_ACCESS,
        token,
        cookie::time::Duration::seconds(max_age_secs),
    )
}

/// Build a Set-Cookie header value for the refresh token.
pub fn build_refresh_cookie(token: &str) -> Option<HeaderValue> {
    build_cookie(
        PPE_REFRESH,
        token,
        cookie::time::Duration::days(REFRESH_MAX_AGE_DAYS),
    )
}

/// Build Set-Cookie headers that clear both auth cookies.
pub fn build_clear_cookies() -> (Option<HeaderValue>, Option<HeaderValue>) {
    (
        build_cookie(PPE_ACCESS, "", cookie::time::Duration::ZERO),
        build_cookie(PPE_REFRESH, "", cookie::time::Duration::ZERO),
    )
}

/// Extract the access token from cookies (preferred) or Bearer header (fallback).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, PPE_ACCESS) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Extract the refresh token from cookies.
pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, PPE_REFRESH)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse_encoded(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}

/// Set both auth cookies on the response from a fresh backend session.
pub fn set_auth_cookies(headers: &mut HeaderMap, session: &AuthSession) {
    let access = build_access_cookie(&session.access_token, session.expires_in);
    let refresh = build_refresh_cookie(&session.refresh_token);
    for value in [access, refresh].into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Clear both auth cookies on the response.
pub fn clear_auth_cookies(headers: &mut HeaderMap) {
    let (access, refresh) = build_clear_cookies();
    for value in [access, refresh].into_iter().flatten() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Pending cookie action to be picked up by the auth middleware.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set(AuthSession),
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
/// Stored in request extensions so server functions can populate it.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        if let Ok(mut pending) = self.0.lock() {
            *pending = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut pending| pending.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.put(action);
        }
    }
}

/// Schedule auth cookies to be set by the middleware.
/// Called from server functions.
pub fn schedule_auth_cookies(session: &AuthSession) {
    schedule(PendingCookieAction::Set(session.clone()));
}

/// Schedule auth cookies to be cleared by the middleware.
/// Called from server functions.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}
