use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Condition recorded by a daily inspection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Regular,
    Bad,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Good, Condition::Regular, Condition::Bad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Regular => "regular",
            Condition::Bad => "bad",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Good => "Bom",
            Condition::Regular => "Regular",
            Condition::Bad => "Ruim",
        }
    }
}

/// Returned when a form value is not one of the known conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCondition(pub String);

impl fmt::Display for UnknownCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown condition: {}", self.0)
    }
}

impl std::error::Error for UnknownCondition {}

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// An inspection row. Inspections are insert-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inspection {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub user_id: Uuid,
    pub condition: Condition,
    #[serde(default)]
    pub notes: Option<String>,
    pub inspection_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Inspection {
    pub const TABLE: &'static str = "inspections";
}

/// Insert payload for a new inspection. `inspection_date` is left to the
/// backend default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewInspection {
    pub equipment_id: Uuid,
    pub user_id: Uuid,
    pub condition: Condition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
