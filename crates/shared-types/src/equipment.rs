use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an equipment item.
///
/// Only `active` is meaningful to the dashboard; any other stored value
/// decodes as `Inactive`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EquipmentStatus {
    Active,
    #[default]
    Inactive,
}

impl From<String> for EquipmentStatus {
    fn from(value: String) -> Self {
        if value == "active" {
            EquipmentStatus::Active
        } else {
            EquipmentStatus::Inactive
        }
    }
}

impl EquipmentStatus {
    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "Ativo",
            EquipmentStatus::Inactive => "Inativo",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EquipmentStatus::Active)
    }
}

/// Catalog entry describing a kind of PPE.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentType {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A single piece of PPE assigned to a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    pub id: Uuid,
    pub type_id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub serial_number: Option<String>,
    pub status: EquipmentStatus,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    pub const TABLE: &'static str = "equipment";
}

/// Equipment row embedded with its type, as returned by
/// `select=*,equipment_types(*)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentWithType {
    #[serde(flatten)]
    pub equipment: Equipment,
    #[serde(rename = "equipment_types")]
    pub equipment_type: EquipmentType,
}

impl EquipmentWithType {
    /// Embedded select used by every equipment listing.
    pub const SELECT: &'static str = "*,equipment_types(*)";

    /// Option text for equipment pickers: "name - category".
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}",
            self.equipment_type.name, self.equipment_type.category
        )
    }
}

/// Dates are shown in the Brazilian day-first format.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
