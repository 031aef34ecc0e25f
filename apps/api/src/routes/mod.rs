pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Seed profiles
        .route("/api/v1/profile/sample", get(tailoring::handle_sample_profile))
        .route("/api/v1/profile/blank", get(tailoring::handle_blank_profile))
        // Tailoring API
        .route("/api/v1/profile/filter", post(tailoring::handle_filter))
        .route("/api/v1/profile/relevance", post(tailoring::handle_relevance))
        // Editor API
        .route("/api/v1/profile/edit", post(editor::handle_edit))
        .fallback(not_found)
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
