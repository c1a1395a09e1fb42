//! Verification of session access tokens.
//!
//! Sessions are issued by the remote store's identity service as HS256-signed
//! JWTs. This service never issues tokens; it only checks the signature and
//! expiry with the shared secret and reads the user id, email and the
//! externally managed role from the claims.

use gamehub_core::roles::ROLE_ADMIN;
use gamehub_core::types::EntryId;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims read from a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the identity provider's user id.
    pub sub: EntryId,
    /// The user's email address.
    #[serde(default)]
    pub email: String,
    /// Provider-managed metadata; carries the role.
    #[serde(default)]
    pub app_metadata: AppMetadata,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

impl SessionClaims {
    /// Whether the identity provider marked this user as an administrator.
    pub fn is_admin(&self) -> bool {
        self.app_metadata.role.as_deref() == Some(ROLE_ADMIN)
    }
}

/// Configuration for session token verification.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Expected `aud` claim. Unset means the audience is not checked.
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Load session verification settings from environment variables.
    ///
    /// | Env Var        | Required | Default |
    /// |----------------|----------|---------|
    /// | `JWT_SECRET`   | **yes**  | --      |
    /// | `JWT_AUDIENCE` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let audience = std::env::var("JWT_AUDIENCE")
            .ok()
            .filter(|a| !a.trim().is_empty());

        Self { secret, audience }
    }
}

/// Validate and decode a session token, returning its [`SessionClaims`].
///
/// Checks the HS256 signature and expiry, and the audience when one is
/// configured.
pub fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    match &config.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
