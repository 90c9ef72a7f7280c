//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API routes
///
/// The example endpoints follow the query-parameter contract: GET reads one
/// item when `?id=` is present and the whole list otherwise; PUT and DELETE
/// require `?id=`.
fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/example",
        get(handlers::example::get_examples)
            .post(handlers::example::create_example)
            .put(handlers::example::update_example)
            .delete(handlers::example::delete_example),
    )
}
