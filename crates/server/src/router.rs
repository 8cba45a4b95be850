use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/auth/register", post(handlers::register_handler))
        .route("/auth/login", post(handlers::login_handler))
        .route("/topics", get(handlers::list_topics_handler))
        .route(
            "/topics/{id}/vocabularies",
            get(handlers::list_vocabularies_handler),
        )
        .route("/topics/{id}/quiz", get(handlers::topic_quiz_handler))
        .route("/progress", get(handlers::progress_handler))
        .route("/quiz/submit", post(handlers::submit_quiz_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
