//! # Content Route Handlers
//!
//! Public, read-only access to the seeded topics, vocabulary, and quiz
//! questions. An unknown topic id yields an empty list, not a 404.

use crate::{errors::AppError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use wordtrail::{
    content,
    types::{QuizQuestionView, Topic, Vocabulary},
};

/// `GET /topics` — all topics in insertion order.
pub async fn list_topics_handler(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Topic>>, AppError> {
    let topics = content::list_topics(&app_state.sqlite_provider.db).await?;
    Ok(Json(topics))
}

/// `GET /topics/{id}/vocabularies` — a topic's flashcard entries.
pub async fn list_vocabularies_handler(
    State(app_state): State<AppState>,
    Path(topic_id): Path<i64>,
) -> Result<Json<Vec<Vocabulary>>, AppError> {
    let vocabularies = content::list_vocabularies(&app_state.sqlite_provider.db, topic_id).await?;
    Ok(Json(vocabularies))
}

/// `GET /topics/{id}/quiz` — a topic's questions with options grouped under
/// their `A`..`D` labels.
pub async fn topic_quiz_handler(
    State(app_state): State<AppState>,
    Path(topic_id): Path<i64>,
) -> Result<Json<Vec<QuizQuestionView>>, AppError> {
    let questions = content::list_quiz(&app_state.sqlite_provider.db, topic_id).await?;
    Ok(Json(questions))
}
