pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing API
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_pdf))
        .route(
            "/api/v1/resumes/parse-text",
            post(handlers::handle_parse_text),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
