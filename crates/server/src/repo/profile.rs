use shared_types::{AppError, Profile};
use uuid::Uuid;

use crate::backend::{BackendClient, Direction, Select};

/// Find the profile for a user id. `None` when row-level policies hide it
/// or the row does not exist.
pub async fn find_by_id(
    client: &BackendClient,
    access_token: &str,
    id: Uuid,
) -> Result<Option<Profile>, AppError> {
    let query = Select::from(Profile::TABLE).eq("id", id);
    let rows: Vec<Profile> = client.select(access_token, &query).await?;
    Ok(rows.into_iter().next())
}

/// List every profile visible to the caller, alphabetically by name.
pub async fn list_all(client: &BackendClient, access_token: &str) -> Result<Vec<Profile>, AppError> {
    let query = Select::from(Profile::TABLE).order("full_name", Direction::Asc);
    client.select(access_token, &query).await
}
