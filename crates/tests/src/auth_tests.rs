use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{unreachable_client, FakeBackend, ANON_KEY};

#[tokio::test]
async fn password_grant_returns_session() {
    let fake = FakeBackend::start().await;
    let id = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");

    let session = fake
        .client()
        .sign_in_with_password("ana@example.com", "s3nha")
        .await
        .unwrap();

    assert_eq!(session.user.id, id);
    assert_eq!(session.expires_in, 3600);
    assert!(!session.access_token.is_empty());

    let request = fake.requests().pop().unwrap();
    assert_eq!(request.path, "/auth/v1/token");
    assert_eq!(
        request.query,
        vec![("grant_type".to_string(), "password".to_string())]
    );
    assert_eq!(request.apikey.as_deref(), Some(ANON_KEY));
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let fake = FakeBackend::start().await;
    fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");

    let err = fake
        .client()
        .sign_in_with_password("ana@example.com", "errada")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    let err = fake
        .client()
        .sign_in_with_password("ninguem@example.com", "s3nha")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn refresh_token_is_single_use() {
    let fake = FakeBackend::start().await;
    let id = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let refresh = fake.refresh_token(id);
    let client = fake.client();

    let session = client.refresh_session(&refresh).await.unwrap();
    assert_eq!(session.user.id, id);
    assert_ne!(session.refresh_token, refresh);

    let err = client.refresh_session(&refresh).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn sign_out_revokes_as_the_user() {
    let fake = FakeBackend::start().await;
    let id = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    fake.client().sign_out(&session.access_token).await.unwrap();

    assert_eq!(fake.logouts(), vec![id]);
    let request = fake.requests().pop().unwrap();
    assert_eq!(request.bearer.as_deref(), Some(session.access_token.as_str()));
}

#[tokio::test]
async fn sign_out_with_expired_token_fails_as_unauthorized() {
    let fake = FakeBackend::start().await;
    let id = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let expired = fake.access_token(id, -3600);

    let err = fake.client().sign_out(&expired).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(fake.logouts().is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_upstream() {
    let client = unreachable_client();

    let err = client
        .sign_in_with_password("ana@example.com", "s3nha")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
}
