//! API routes.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::handlers::{get_daily, get_sample, health};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Anime of the day (lazily refreshed on date rollover)
        .route("/data", get(get_daily))
        // Fixed sample payload
        .route("/test", get(get_sample));

    let health_routes = Router::new().route("/health", get(health));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
