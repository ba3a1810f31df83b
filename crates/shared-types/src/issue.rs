use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow status of a reported problem. New reports always start as `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

/// A problem reported against a piece of equipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub reported_by: Uuid,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
    pub status: IssueStatus,
    pub description: String,
    #[serde(default)]
    pub resolution: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    pub const TABLE: &'static str = "issues";
}

/// Insert payload for a new issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewIssue {
    pub equipment_id: Uuid,
    pub reported_by: Uuid,
    pub description: String,
    pub status: IssueStatus,
}

impl NewIssue {
    pub fn pending(equipment_id: Uuid, reported_by: Uuid, description: String) -> Self {
        Self {
            equipment_id,
            reported_by,
            description,
            status: IssueStatus::Pending,
        }
    }
}
