use shared_types::{AppError, Issue, NewIssue, ReportIssueRequest};
use uuid::Uuid;

use crate::backend::BackendClient;

/// Insert a pending issue reported by `reported_by`.
pub async fn create(
    client: &BackendClient,
    access_token: &str,
    reported_by: Uuid,
    req: ReportIssueRequest,
) -> Result<Issue, AppError> {
    let row = NewIssue::pending(req.equipment_id, reported_by, req.description);
    client.insert(access_token, Issue::TABLE, &row).await
}
