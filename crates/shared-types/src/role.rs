use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role stored on a profile. Assigned by the backend, never by the client.
///
/// - `Worker`: owns equipment, logs inspections and reports problems.
/// - `Supervisor`: oversees a team; dashboard is still a placeholder.
/// - `SafetyTechnician`: valid role without a dashboard of its own.
/// - `Admin`: manages user accounts.
///
/// Decoding is strict: a stored role string outside this set is an error
/// rather than a silent downgrade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Worker,
    Supervisor,
    SafetyTechnician,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Worker,
        Role::Supervisor,
        Role::SafetyTechnician,
        Role::Admin,
    ];

    /// Lowercase string as stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Worker => "worker",
            Role::Supervisor => "supervisor",
            Role::SafetyTechnician => "safety_technician",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label shown in the user list.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Worker => "Colaborador",
            Role::Supervisor => "Supervisor",
            Role::SafetyTechnician => "Técnico de Segurança",
            Role::Admin => "Administrador",
        }
    }

    /// Landing path after sign-in. `None` when the role has no dashboard.
    pub fn home_path(&self) -> Option<&'static str> {
        match self {
            Role::Worker => Some("/worker"),
            Role::Supervisor => Some("/supervisor"),
            Role::Admin => Some("/admin"),
            Role::SafetyTechnician => None,
        }
    }

    /// Sidebar title for the role's dashboard.
    pub fn dashboard_title(&self) -> Option<&'static str> {
        match self {
            Role::Worker => Some("Painel do Colaborador"),
            Role::Supervisor => Some("Painel do Supervisor"),
            Role::Admin => Some("Painel do Administrador"),
            Role::SafetyTechnician => None,
        }
    }
}

/// Returned when a role string is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
