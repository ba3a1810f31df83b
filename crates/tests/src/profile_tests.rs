use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Role};
use uuid::Uuid;

use crate::common::FakeBackend;

#[tokio::test]
async fn finds_profile_by_id() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "supervisor");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    let profile = server::repo::profile::find_by_id(&fake.client(), &session.access_token, ana)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.full_name, "Ana Souza");
    assert_eq!(profile.role, Role::Supervisor);

    let request = fake.requests().pop().unwrap();
    assert_eq!(
        request.query,
        vec![
            ("select".to_string(), "*".to_string()),
            ("id".to_string(), format!("eq.{ana}")),
        ]
    );
}

#[tokio::test]
async fn missing_profile_is_none() {
    let fake = FakeBackend::start().await;
    fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    let profile =
        server::repo::profile::find_by_id(&fake.client(), &session.access_token, Uuid::new_v4())
            .await
            .unwrap();
    assert_eq!(profile, None);
}

#[tokio::test]
async fn unknown_role_is_rejected() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "auditor");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    let err = server::repo::profile::find_by_id(&fake.client(), &session.access_token, ana)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn lists_profiles_by_name() {
    let fake = FakeBackend::start().await;
    fake.add_user("zeca@example.com", "s3nha", "Zeca Alves", "worker");
    fake.add_user("admin@example.com", "s3nha", "Ana Admin", "admin");
    fake.add_user("tec@example.com", "s3nha", "Marta Reis", "safety_technician");
    let session = fake.sign_in("admin@example.com", "s3nha").await;

    let profiles = server::repo::profile::list_all(&fake.client(), &session.access_token)
        .await
        .unwrap();
    let names: Vec<_> = profiles.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names, vec!["Ana Admin", "Marta Reis", "Zeca Alves"]);
    assert_eq!(profiles[1].role.label(), "Técnico de Segurança");
}
