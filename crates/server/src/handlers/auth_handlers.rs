//! # Authentication Route Handlers
//!
//! Registration and login. Passwords arrive in the request body, are hashed
//! inside `wordtrail-access`, and are never logged here.

use crate::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use wordtrail_access::{register_user, token, verify_credentials, User};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user_id: i64,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The public view of a user, without the password hash.
#[derive(Serialize)]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub user: UserView,
}

/// `POST /auth/register` — creates a user account.
///
/// Duplicate usernames or emails are reported as a 400 with
/// `{"success": false, "message": ...}`.
pub async fn register_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    if payload.username.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.is_empty()
    {
        return Err(AppError::Validation(
            "username, email and password are required".to_string(),
        ));
    }

    let user_id = register_user(
        &app_state.sqlite_provider.db,
        payload.username.trim(),
        payload.email.trim(),
        &payload.password,
    )
    .await?;

    info!(user_id, "New user registered");
    Ok(Json(RegisterResponse {
        success: true,
        user_id,
    }))
}

/// `POST /auth/login` — validates credentials and issues a session token
/// with a 24-hour expiry. Bad credentials are a 401.
pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = verify_credentials(
        &app_state.sqlite_provider.db,
        payload.username.trim(),
        &payload.password,
    )
    .await?;

    let token = token::issue(&user, &app_state.config.session_secret)?;

    info!(user_id = user.id, "User logged in");
    Ok(Json(LoginResponse {
        success: true,
        token,
        user: UserView::from(&user),
    }))
}
