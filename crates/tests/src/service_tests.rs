use pretty_assertions::assert_eq;
use server::rate_limit::RateLimitState;
use server::service::{self, SessionLookup};
use shared_types::{AppErrorKind, Condition, ReportIssueRequest, Role, SubmitInspectionRequest};
use std::time::Duration;

use crate::common::FakeBackend;

fn limiter() -> RateLimitState {
    RateLimitState::new(2, Duration::from_secs(300))
}

#[tokio::test]
async fn worker_lists_own_equipment() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let helmet = fake.add_equipment(ana, "Capacete", "active", "2024-03-01T08:00:00+00:00");

    let rows = service::list_my_equipment(&fake.client(), &fake.identity(ana))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].equipment.id, helmet);
}

#[tokio::test]
async fn admin_cannot_use_worker_operations() {
    let fake = FakeBackend::start().await;
    let root = fake.add_user("root@example.com", "s3nha", "Rita Admin", "admin");
    let identity = fake.identity(root);
    let client = fake.client();
    let equipment = fake.add_equipment(root, "Luvas", "active", "2024-03-01T08:00:00+00:00");

    let err = service::list_my_equipment(&client, &identity)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);

    let inspection = SubmitInspectionRequest {
        equipment_id: equipment,
        condition: Condition::Good,
        notes: None,
    };
    let err = service::submit_inspection(&client, &identity, inspection)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);

    let issue = ReportIssueRequest {
        equipment_id: equipment,
        description: "Alça rasgada".to_string(),
    };
    let err = service::report_issue(&client, &identity, issue)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);

    assert!(fake.rows("inspections").is_empty());
    assert!(fake.rows("issues").is_empty());
}

#[tokio::test]
async fn worker_cannot_list_profiles() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");

    let err = service::list_profiles(&fake.client(), &fake.identity(ana))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn supervisor_cannot_list_profiles() {
    let fake = FakeBackend::start().await;
    let sara = fake.add_user("sara@example.com", "s3nha", "Sara Lopes", "supervisor");

    let err = service::list_profiles(&fake.client(), &fake.identity(sara))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[tokio::test]
async fn admin_lists_every_profile() {
    let fake = FakeBackend::start().await;
    let root = fake.add_user("root@example.com", "s3nha", "Rita Admin", "admin");
    fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");

    let profiles = service::list_profiles(&fake.client(), &fake.identity(root))
        .await
        .unwrap();

    let names: Vec<_> = profiles.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names, vec!["Ana Souza", "Rita Admin"]);
}

#[tokio::test]
async fn identity_without_profile_is_unauthorized() {
    let fake = FakeBackend::start().await;
    let ghost = fake.add_account("ghost@example.com", "s3nha");

    let err = service::require_role(&fake.client(), &fake.identity(ghost), Role::Worker)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn worker_inspection_is_recorded_as_the_caller() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let boots = fake.add_equipment(ana, "Botas", "active", "2024-03-01T08:00:00+00:00");

    let req = SubmitInspectionRequest {
        equipment_id: boots,
        condition: Condition::Regular,
        notes: Some("Sola gasta".to_string()),
    };
    let inspection = service::submit_inspection(&fake.client(), &fake.identity(ana), req)
        .await
        .unwrap();

    assert_eq!(inspection.user_id, ana);
    assert_eq!(inspection.equipment_id, boots);
    assert_eq!(fake.rows("inspections").len(), 1);
}

#[tokio::test]
async fn blank_issue_is_rejected_before_any_backend_call() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let boots = fake.add_equipment(ana, "Botas", "active", "2024-03-01T08:00:00+00:00");

    let req = ReportIssueRequest {
        equipment_id: boots,
        description: String::new(),
    };
    let err = service::report_issue(&fake.client(), &fake.identity(ana), req)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn sign_in_returns_session_and_profile() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");

    let (session, profile) =
        service::sign_in(&fake.client(), &limiter(), "  ana@example.com ", "s3nha".into())
            .await
            .unwrap();

    assert_eq!(session.user.id, ana);
    assert_eq!(profile.role, Role::Worker);
    assert!(fake.logouts().is_empty());
}

#[tokio::test]
async fn profileless_account_is_signed_out_again() {
    let fake = FakeBackend::start().await;
    let ghost = fake.add_account("ghost@example.com", "s3nha");

    let err = service::sign_in(&fake.client(), &limiter(), "ghost@example.com", "s3nha".into())
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(fake.logouts(), vec![ghost]);
}

#[tokio::test]
async fn successful_sign_in_resets_the_limiter() {
    let fake = FakeBackend::start().await;
    fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let client = fake.client();
    let limiter = limiter();

    let err = service::sign_in(&client, &limiter, "ana@example.com", "errada".into())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);

    service::sign_in(&client, &limiter, "ana@example.com", "s3nha".into())
        .await
        .unwrap();

    // Budget starts over: two more attempts reach the backend
    for _ in 0..2 {
        let err = service::sign_in(&client, &limiter, "ana@example.com", "errada".into())
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
    }

    let err = service::sign_in(&client, &limiter, "ANA@example.com", "s3nha".into())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::RateLimited);
}

#[tokio::test]
async fn current_profile_reports_missing_profile() {
    let fake = FakeBackend::start().await;
    let ghost = fake.add_account("ghost@example.com", "s3nha");
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let client = fake.client();

    let lookup = service::current_profile(&client, None).await.unwrap();
    assert_eq!(lookup, SessionLookup::Anonymous);

    let lookup = service::current_profile(&client, Some(&fake.identity(ghost)))
        .await
        .unwrap();
    assert_eq!(lookup, SessionLookup::MissingProfile);

    let lookup = service::current_profile(&client, Some(&fake.identity(ana)))
        .await
        .unwrap();
    assert!(matches!(lookup, SessionLookup::SignedIn(p) if p.id == ana));
}

#[tokio::test]
async fn sign_out_revokes_the_callers_session() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let client = fake.client();

    service::sign_out(&client, None).await;
    assert!(fake.logouts().is_empty());

    service::sign_out(&client, Some(&fake.identity(ana))).await;
    assert_eq!(fake.logouts(), vec![ana]);
}
