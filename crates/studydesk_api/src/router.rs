//! Route table.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers::{assistant, documents, habits, planner, session, stats, tasks};
use crate::state::SharedState;

/// Builds the full application router.
///
/// Unmatched paths are served from `frontend_dir` when one is given.
pub fn build_router(state: SharedState, frontend_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(session::health))
        .route("/auth/login", post(session::login_guest))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:task_id",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/habits", get(habits::list_habits).post(habits::create_habit))
        .route(
            "/habits/:habit_id",
            get(habits::get_habit)
                .put(habits::update_habit)
                .delete(habits::delete_habit),
        )
        .route("/habits/:habit_id/track", post(habits::track_habit))
        .route(
            "/documents",
            get(documents::list_documents).post(documents::upload_document),
        )
        .route("/documents/upload", post(documents::upload_document))
        .route(
            "/documents/:doc_id",
            get(documents::get_document).delete(documents::delete_document),
        )
        .route(
            "/documents/:doc_id/summarize",
            get(documents::summarize_document),
        )
        .route("/documents/:doc_id/quiz", get(documents::document_quiz))
        .route("/planner/generate", post(planner::generate_plan))
        .route("/planner/today", get(planner::get_today_plan))
        .route("/stats/dashboard", get(stats::dashboard_stats))
        .route("/ai/ask", post(assistant::ask))
        // Uploads are unbounded.
        .layer(DefaultBodyLimit::disable())
        .with_state(state);

    let app = match frontend_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };
    app.layer(cors)
}
