use dioxus::prelude::*;
use shared_types::{Profile, SessionStatus};

/// Session state shared by every route. Written only by its own restore,
/// sign-in and sign-out operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionContext {
    pub status: Signal<SessionStatus>,
}

impl SessionContext {
    /// Build the context from the initial `get_current_profile` lookup.
    /// `None` means the lookup has not answered yet.
    pub fn restored(lookup: Option<&Result<Option<Profile>, ServerFnError>>) -> Self {
        let status = match lookup {
            None => SessionStatus::Restoring,
            Some(Ok(Some(profile))) => SessionStatus::SignedIn(profile.clone()),
            Some(Ok(None)) => SessionStatus::SignedOut,
            Some(Err(e)) => {
                tracing::error!(%e, "Session restore failed, continuing signed out");
                SessionStatus::SignedOut
            }
        };
        Self {
            status: Signal::new(status),
        }
    }

    pub fn profile(&self) -> Option<Profile> {
        self.status.read().profile().cloned()
    }

    /// Authenticate and, on success, publish the profile so guards re-evaluate.
    pub async fn sign_in(mut self, email: String, password: String) -> Result<Profile, ServerFnError> {
        let profile = server::api::sign_in(email, password).await?;
        self.status.set(SessionStatus::SignedIn(profile.clone()));
        Ok(profile)
    }

    /// Drop the local session first, then tell the server. A failed server
    /// call is logged and otherwise ignored.
    pub async fn sign_out(mut self) {
        self.status.set(SessionStatus::SignedOut);
        if let Err(e) = server::api::sign_out().await {
            tracing::error!(%e, "Sign-out request failed");
        }
    }
}

/// Hook to access the session.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
