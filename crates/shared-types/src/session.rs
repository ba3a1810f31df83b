use serde::{Deserialize, Serialize};

use crate::{Profile, Role};

/// Client-side view of the signed-in identity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    /// The initial session lookup has not answered yet.
    #[default]
    Restoring,
    SignedOut,
    SignedIn(Profile),
}

impl SessionStatus {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            SessionStatus::SignedIn(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Outcome of evaluating a role-gated subtree against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring. Render a neutral placeholder and do not redirect.
    Wait,
    Allow,
    RedirectToLogin,
}

/// Decide whether the subtree bound to `required` may render.
pub fn decide(status: &SessionStatus, required: Role) -> GuardDecision {
    match status {
        SessionStatus::Restoring => GuardDecision::Wait,
        SessionStatus::SignedIn(profile) if profile.role == required => GuardDecision::Allow,
        _ => GuardDecision::RedirectToLogin,
    }
}

/// Where the login view sends the user for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginDestination {
    /// Show the sign-in form.
    Stay,
    /// Signed in with a dashboard role.
    Home(&'static str),
    /// Signed in with a role that has no dashboard.
    NoDashboard,
}

pub fn login_destination(status: &SessionStatus) -> LoginDestination {
    match status {
        SessionStatus::SignedIn(profile) => match profile.role.home_path() {
            Some(path) => LoginDestination::Home(path),
            None => LoginDestination::NoDashboard,
        },
        _ => LoginDestination::Stay,
    }
}
