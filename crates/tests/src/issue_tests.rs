use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, IssueStatus, ReportIssueRequest};

use crate::common::FakeBackend;

#[tokio::test]
async fn reported_issue_is_pending_and_attributed() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let boots = fake.add_equipment(ana, "Botas", "active", "2024-01-01T08:00:00+00:00");
    let session = fake.sign_in("ana@example.com", "s3nha").await;

    let req = ReportIssueRequest::from_form(&boots.to_string(), "Sola descolando").unwrap();
    let issue = server::repo::issue::create(&fake.client(), &session.access_token, ana, req)
        .await
        .unwrap();

    assert_eq!(issue.equipment_id, boots);
    assert_eq!(issue.reported_by, ana);
    assert_eq!(issue.status, IssueStatus::Pending);
    assert_eq!(issue.description, "Sola descolando");
    assert_eq!(issue.assigned_to, None);

    let stored = fake.rows("issues");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["status"], "pending");
}

#[tokio::test]
async fn forbidden_insert_surfaces_as_forbidden() {
    let fake = FakeBackend::start().await;
    let ana = fake.add_user("ana@example.com", "s3nha", "Ana Souza", "worker");
    let boots = fake.add_equipment(ana, "Botas", "active", "2024-01-01T08:00:00+00:00");
    let session = fake.sign_in("ana@example.com", "s3nha").await;
    fake.fail_rest_with(403);

    let req = ReportIssueRequest::from_form(&boots.to_string(), "Sola descolando").unwrap();
    let err = server::repo::issue::create(&fake.client(), &session.access_token, ana, req)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert!(fake.rows("issues").is_empty());
}
