//! # Quiz Route Handlers

use crate::{auth::middleware::AuthenticatedUser, errors::AppError, state::AppState};
use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use wordtrail::{
    quiz,
    types::{AnswerRecord, QuizScore},
};

#[derive(Deserialize)]
pub struct SubmitQuizRequest {
    pub results: Vec<AnswerRecord>,
}

/// `POST /quiz/submit` — scores a submission and records one result row for
/// the authenticated user.
///
/// Each answer's `is_correct` flag is asserted by the client and recorded
/// without re-checking against the stored questions; the result row carries
/// the first answer's quiz id.
pub async fn submit_quiz_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<SubmitQuizRequest>,
) -> Result<Json<QuizScore>, AppError> {
    let score = quiz::submit_result(
        &app_state.sqlite_provider.db,
        user.0.user_id,
        &payload.results,
    )
    .await?;

    info!(
        user_id = user.0.user_id,
        score = score.score,
        total = score.total,
        "Quiz submission scored"
    );
    Ok(Json(score))
}
