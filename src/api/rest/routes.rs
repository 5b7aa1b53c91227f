//! # Route Table
//!
//! Builds the axum router for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Creates the REST router with all endpoints and tracing middleware.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v1/shipping/quote",
            post(handlers::compute_shipping_quote),
        )
        .route("/api/v1/variants/{product_id}", get(handlers::get_variant_info))
        .route("/api/v1/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
