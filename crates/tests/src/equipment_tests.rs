use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, EquipmentStatus};

use crate::common::FakeBackend;

#[tokio::test]
async fn lists_only_own_equipment_newest_first() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let bia = fake.add_user("bia@example.com", "s3nha", "Bia Lima", "worker");

    let oldest = fake.add_equipment(ana, "Luvas", "active", "2024-01-01T08:00:00+00:00");
    let newest = fake.add_equipment(ana, "Capacete", "inactive", "2024-03-01T08:00:00+00:00");
    fake.add_equipment(bia, "Botas", "active", "2024-02-01T08:00:00+00:00");

    let session = fake.sign_in("ana@example.com", "s3nha").await;
    let rows = server::repo::equipment::list_for_user(&fake.client(), &session.access_token, ana)
        .await
        .unwrap();

    let ids: Vec<_> = rows.iter().map(|r| r.equipment.id).collect();
    assert_eq!(ids, vec![newest, oldest]);
    assert_eq!(rows[0].equipment_type.name, "Capacete");
    assert_eq!(rows[0].equipment.status, EquipmentStatus::Inactive);
    assert_eq!(rows[1].equipment.status, EquipmentStatus::Active);
    assert!(rows.iter().all(|r| r.equipment.user_id == ana));
}

#[tokio::test]
async fn query_filters_by_user_and_embeds_type() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    server::repo::equipment::list_for_user(&fake.client(), &session.access_token, ana)
        .await
        .unwrap();

    let request = fake.requests().pop().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/rest/v1/equipment");
    assert_eq!(
        request.query,
        vec![
            ("select".to_string(), "*,equipment_types(*)".to_string()),
            ("user_id".to_string(), format!("eq.{ana}")),
            ("order".to_string(), "created_at.desc".to_string()),
        ]
    );
    assert_eq!(request.bearer.as_deref(), Some(session.access_token.as_str()));
}

#[tokio::test]
async fn empty_assignment_is_an_empty_list() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    let rows = server::repo::equipment::list_for_user(&fake.client(), &session.access_token, ana)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn backend_failures_map_to_error_kinds() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let session = fake.sign_in("ana@example.com", "s3nha").await;
    let client = fake.client();

    for (status, kind) in [
        (500, AppErrorKind::Upstream),
        (503, AppErrorKind::Upstream),
        (401, AppErrorKind::Unauthorized),
        (403, AppErrorKind::Forbidden),
    ] {
        fake.fail_rest_with(status);
        let err = server::repo::equipment::list_for_user(&client, &session.access_token, ana)
            .await
            .unwrap_err();
        assert_eq!(err.kind, kind, "status {status}");
    }
}

#[tokio::test]
async fn expired_token_is_rejected_by_backend() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let expired = fake.access_token(ana, -3600);

    let err = server::repo::equipment::list_for_user(&fake.client(), &expired, ana)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}
