pub mod cookies;
pub mod jwt;
pub mod middleware;

use uuid::Uuid;

/// Authenticated caller, inserted into request extensions by the auth
/// middleware. The raw token is kept so backend calls run as this user.
#[derive(Debug, Clone)]
pub struct Identity {
    pub claims: jwt::Claims,
    pub access_token: String,
}

impl Identity {
    pub fn user_id(&self) -> Uuid {
        self.claims.sub
    }
}
