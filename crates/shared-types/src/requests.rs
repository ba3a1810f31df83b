use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::Condition;

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SignInRequest {
    #[cfg_attr(feature = "validation", validate(email(message = "E-mail inválido")))]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Informe a senha"))
    )]
    pub password: String,
}

/// Daily inspection for one equipment item. The inspector is taken from the
/// server-side session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitInspectionRequest {
    pub equipment_id: Uuid,
    pub condition: Condition,
    pub notes: Option<String>,
}

impl SubmitInspectionRequest {
    /// Build from raw form values. Returns `None` when no valid condition was
    /// chosen so the caller can stop before any server call. Blank notes become
    /// `None`.
    pub fn from_form(equipment_id: Uuid, condition: &str, notes: &str) -> Option<Self> {
        let condition = condition.parse().ok()?;
        let notes = notes.trim();
        Some(Self {
            equipment_id,
            condition,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Problem report for one equipment item. The reporter is taken from the
/// server-side session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ReportIssueRequest {
    pub equipment_id: Uuid,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 2000, message = "Descreva o problema"))
    )]
    pub description: String,
}

impl ReportIssueRequest {
    /// Build from raw form values. Returns `None` when no equipment is chosen
    /// or the description is blank.
    pub fn from_form(equipment_id: &str, description: &str) -> Option<Self> {
        let equipment_id = Uuid::parse_str(equipment_id).ok()?;
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        Some(Self {
            equipment_id,
            description: description.to_string(),
        })
    }
}
