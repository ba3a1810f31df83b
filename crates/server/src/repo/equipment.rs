use shared_types::{AppError, Equipment, EquipmentWithType};
use uuid::Uuid;

use crate::backend::{BackendClient, Direction, Select};

/// Equipment assigned to `user_id`, joined with its type, newest first.
pub async fn list_for_user(
    client: &BackendClient,
    access_token: &str,
    user_id: Uuid,
) -> Result<Vec<EquipmentWithType>, AppError> {
    let query = Select::from(Equipment::TABLE)
        .columns(EquipmentWithType::SELECT)
        .eq("user_id", user_id)
        .order("created_at", Direction::Desc);
    client.select(access_token, &query).await
}
