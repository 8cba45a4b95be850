//! # Authentication Middleware
//!
//! This module provides the Axum extractor for JWT-based authentication.
//! `AuthenticatedUser` can be used in handlers to ensure a valid session
//! token is present and to get the caller's identity claims.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde_json::json;
use tracing::warn;
use wordtrail_access::token::{self, Claims};

use crate::state::AppState;

/// An Axum extractor that provides the authenticated caller's claims.
///
/// Every user-scoped or state-mutating route takes this extractor. A
/// missing, malformed, expired, or signature-invalid bearer token rejects
/// the request with `401 Unauthorized`; there is no guest fallback.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

/// A custom rejection type for authentication failures.
///
/// This allows the `FromRequestParts` implementation to return a specific
/// HTTP status code and error message, which Axum then turns into a response.
pub struct AuthError(StatusCode, String);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "success": false, "message": self.1 }))).into_response()
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer_header =
            Option::<TypedHeader<Authorization<Bearer>>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    warn!("Unexpected error during header extraction: {}", e);
                    AuthError(
                        StatusCode::BAD_REQUEST,
                        "Invalid Authorization header format.".to_string(),
                    )
                })?;

        let Some(TypedHeader(Authorization(bearer))) = bearer_header else {
            return Err(AuthError(
                StatusCode::UNAUTHORIZED,
                "Token is missing.".to_string(),
            ));
        };

        let claims = token::verify(bearer.token(), &state.config.session_secret).map_err(|e| {
            warn!("Session token rejected: {e}");
            AuthError(
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token.".to_string(),
            )
        })?;

        Ok(AuthenticatedUser(claims))
    }
}
