pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::skills_gap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Free-text analysis (two-section extraction)
        .route("/api/v1/analyze", post(analysis::handlers::handle_analyze))
        // Structured skills-gap report
        .route(
            "/api/v1/skills-gap",
            post(skills_gap::handlers::handle_skills_gap),
        )
        .with_state(state)
}
