use axum::{
    body::Body,
    extract::Request,
    middleware,
    routing::get,
    Router,
};
use pretty_assertions::assert_eq;
use server::auth::Identity;
use server::backend::BackendClient;

use crate::common::{send, unreachable_client, FakeBackend};

/// Echoes the caller's user id, or "anonymous".
async fn whoami(req: Request) -> String {
    req.extensions()
        .get::<Identity>()
        .map(|i| i.user_id().to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

fn app(fake: &FakeBackend) -> Router {
    app_with(fake.client())
}

fn app_with(client: BackendClient) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(
            client,
            server::auth::middleware::auth_middleware,
        ))
}

fn request(cookie: Option<String>) -> Request {
    let mut builder = axum::http::Request::builder().uri("/whoami");
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn valid_access_cookie_identifies_caller() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let token = fake.access_token(ana, 3600);

    let (_, cookies, body) = send(&app(&fake), request(Some(format!("ppe_access={token}")))).await;

    assert_eq!(body, ana.to_string());
    assert!(cookies.is_empty());
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn no_cookies_is_anonymous() {
    let fake = FakeBackend::start().await;
    let (_, cookies, body) = send(&app(&fake), request(None)).await;
    assert_eq!(body, "anonymous");
    assert!(cookies.is_empty());
}

#[tokio::test]
async fn expired_access_is_refreshed_transparently() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let expired = fake.access_token(ana, -3600);
    let refresh = fake.refresh_token(ana);

    let cookie = format!("ppe_access={expired}; ppe_refresh={refresh}");
    let (_, cookies, body) = send(&app(&fake), request(Some(cookie))).await;

    assert_eq!(body, ana.to_string());
    assert_eq!(cookies.len(), 2);
    assert!(cookies[0].starts_with("ppe_access="));
    assert!(cookies[1].starts_with("ppe_refresh="));
    assert!(!cookies[1].contains(&refresh));
}

#[tokio::test]
async fn missing_access_with_refresh_cookie_is_refreshed() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let refresh = fake.refresh_token(ana);

    let (_, _, body) = send(&app(&fake), request(Some(format!("ppe_refresh={refresh}")))).await;
    assert_eq!(body, ana.to_string());
}

#[tokio::test]
async fn stale_refresh_clears_cookies() {
    let fake = FakeBackend::start().await;
    let (_, cookies, body) =
        send(&app(&fake), request(Some("ppe_refresh=revoked".to_string()))).await;

    assert_eq!(body, "anonymous");
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}

#[tokio::test]
async fn unreachable_backend_keeps_refresh_cookie() {
    let app = app_with(unreachable_client());
    let (_, cookies, body) =
        send(&app, request(Some("ppe_refresh=still-valid-token".to_string()))).await;

    assert_eq!(body, "anonymous");
    assert!(cookies.is_empty(), "cookies were touched: {cookies:?}");
}

#[tokio::test]
async fn backend_error_on_refresh_keeps_cookies_for_retry() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let refresh = fake.refresh_token(ana);
    fake.fail_token_with(503);

    let cookie = format!("ppe_refresh={refresh}");
    let (_, cookies, body) = send(&app(&fake), request(Some(cookie.clone()))).await;
    assert_eq!(body, "anonymous");
    assert!(cookies.is_empty());

    // Once the backend recovers, the same refresh token still works
    fake.clear_token_failure();
    let (_, cookies, body) = send(&app(&fake), request(Some(cookie))).await;
    assert_eq!(body, ana.to_string());
    assert_eq!(cookies.len(), 2);
}
