//! # Progress Route Handlers

use crate::{auth::middleware::AuthenticatedUser, errors::AppError, state::AppState};
use axum::{extract::State, Json};
use wordtrail::{progress, types::ProgressSummary};

/// `GET /progress` — the authenticated user's aggregate learning
/// statistics, recomputed from stored rows on every call.
pub async fn progress_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ProgressSummary>, AppError> {
    let summary =
        progress::progress_for_user(&app_state.sqlite_provider.db, user.0.user_id).await?;
    Ok(Json(summary))
}
