mod handlers;
mod middleware;
mod state;

pub use state::HttpState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use self::middleware::{log_responses, set_request_context};

pub fn build_router(state: HttpState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_request_bytes);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/exam/generate", post(handlers::generate_exam))
        .route("/api/worksheet/generate", post(handlers::generate_worksheet))
        .route(
            "/api/lesson-plan/generate",
            post(handlers::generate_lesson_plan),
        )
        .route(
            "/api/lesson-plan/generate-docx",
            post(handlers::generate_lesson_plan_docx),
        )
        .layer(body_limit)
        .layer(axum_middleware::from_fn(log_responses))
        .layer(axum_middleware::from_fn(set_request_context))
        .with_state(state)
}
