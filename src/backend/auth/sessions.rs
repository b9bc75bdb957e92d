/**
 * Bearer Tokens
 *
 * This module issues and verifies the HS256 JWTs handed out by login.
 *
 * The claim set is `{ "id": <user id> }`. Without a configured lifetime no
 * `exp` claim is written and none is required on verification, so tokens
 * stay valid for as long as the signing secret does.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,
    /// Expiration time (Unix timestamp), only with a configured lifetime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Token issuance or verification failure
#[derive(Debug, Error)]
#[error("token error: {0}")]
pub struct TokenError(#[from] jsonwebtoken::errors::Error);

/// Signs and verifies tokens with the process-wide secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: Option<u64>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `ttl_secs` - lifetime of issued tokens; `None` for non-expiring tokens
    pub fn new(secret: &str, ttl_secs: Option<u64>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = ttl_secs.is_some();
        if ttl_secs.is_some() {
            validation.set_required_spec_claims(&["exp"]);
        }
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Create a JWT token for a user
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, user_id: &str) -> Result<String, TokenError> {
        let exp = self
            .ttl_secs
            .map(|ttl| (Utc::now().timestamp().max(0) as u64).saturating_add(ttl));
        let claims = Claims {
            id: user_id.to_string(),
            exp,
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?)
    }

    /// Verify and decode a JWT token
    ///
    /// Fails on a malformed token, a signature made with another secret, and
    /// (only with a configured lifetime) a missing or past `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}
