use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience the backend stamps on user access tokens.
pub const AUDIENCE: &str = "authenticated";

/// Clock skew tolerated on `exp`, in seconds.
pub const EXPIRY_LEEWAY_SECS: u64 = 60;

/// Claims carried by a backend-issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    /// Database role used by row-level policies (`authenticated`), not the
    /// application role stored on the profile.
    #[serde(default)]
    pub role: String,
    pub exp: i64,
    #[serde(default)]
    pub aud: String,
}

/// Verify an access token's signature, expiry and audience.
pub fn validate_access_token(
    token: &str,
    secret: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[AUDIENCE]);
    validation.leeway = EXPIRY_LEEWAY_SECS;
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
