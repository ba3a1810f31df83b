use shared_types::{AppError, Inspection, NewInspection, SubmitInspectionRequest};
use uuid::Uuid;

use crate::backend::BackendClient;

/// Insert an inspection recorded by `user_id`.
pub async fn create(
    client: &BackendClient,
    access_token: &str,
    user_id: Uuid,
    req: SubmitInspectionRequest,
) -> Result<Inspection, AppError> {
    let row = NewInspection {
        equipment_id: req.equipment_id,
        user_id,
        condition: req.condition,
        notes: req.notes,
    };
    client.insert(access_token, Inspection::TABLE, &row).await
}
