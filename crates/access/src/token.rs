//! Signed session tokens. A token is an HS256 JWT carrying the user's id,
//! username, and role, valid for 24 hours from issuance. The signing secret
//! is supplied by the caller; this crate never reads it from the
//! environment.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{AccessError, User};

/// Session tokens expire 24 hours after issuance.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// The identity claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    pub role: String,
    /// The expiration timestamp (seconds since the epoch).
    pub exp: usize,
}

/// Issues a session token for a user with the standard 24-hour expiry.
pub fn issue(user: &User, secret: &str) -> Result<String, AccessError> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    issue_with_expiry(user, secret, exp)
}

/// Issues a session token with an explicit expiration timestamp. Exposed for
/// tests that need expired or long-lived tokens.
pub fn issue_with_expiry(user: &User, secret: &str, exp: usize) -> Result<String, AccessError> {
    let claims = Claims {
        user_id: user.id,
        username: user.username.clone(),
        role: user.role.clone(),
        exp,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AccessError::TokenSigning(e.to_string()))
}

/// Verifies a token's signature and expiry and returns the embedded claims.
/// Malformed, expired, and signature-invalid tokens all map to
/// `InvalidToken`.
pub fn verify(token: &str, secret: &str) -> Result<Claims, AccessError> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("Token validation failed: {e}");
        AccessError::InvalidToken
    })
}
