//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    models::{api_compare, api_compare_form, api_rules},
    pages::{models_page, models_submit},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let permissive_cors = state.config.server.permissive_cors;
    let shared: SharedState = Arc::new(state);

    let mut router = Router::new()
        // Pages
        .route("/models", get(models_page).post(models_submit))

        // API endpoints
        .route("/api/models/compare",      post(api_compare))
        .route("/api/models/compare/form", post(api_compare_form))
        .route("/api/models/rules",        get(api_rules))
        .route("/health",                  get(health));

    // Middleware
    if permissive_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
