pub mod equipment;
pub mod inspection;
pub mod report_issue;

use shared_types::messages::EQUIPMENT_LOAD_FAILED;
use shared_types::{EquipmentWithType, Loadable};

/// Fetch the caller's equipment for a worker view. Each view owns its copy;
/// nothing is cached between mounts.
pub(crate) async fn load_equipment() -> Loadable<Vec<EquipmentWithType>> {
    let result = server::api::list_my_equipment().await;
    if let Err(e) = &result {
        tracing::error!(%e, "Failed to load equipment");
    }
    Loadable::from_result(result, EQUIPMENT_LOAD_FAILED)
}
