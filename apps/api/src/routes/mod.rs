pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::placement::handlers as placement;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Company directory
        .route("/api/v1/companies", get(placement::handle_list_companies))
        .route("/api/v1/companies/:name", get(placement::handle_get_company))
        // Placement evaluation
        .route(
            "/api/v1/placement/evaluate",
            post(placement::handle_evaluate),
        )
        // Resume analysis
        .route("/api/v1/resume/analyze", post(resume::handle_analyze_resume))
        .with_state(state)
}
