pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_search_and_analyze;
use crate::resume::handlers::handle_analyze_resume;
use crate::state::AppState;

/// Resumes are small; anything past this is rejected before parsing.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/api/v1/health", get(health::health_handler))
        .route(
            "/api/v1/analyze_resume",
            post(handle_analyze_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/api/v1/search_and_analyze",
            post(handle_search_and_analyze),
        )
        .with_state(state)
}
