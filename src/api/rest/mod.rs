//! # REST API
//!
//! REST endpoints using axum for storefront frontends.
//!
//! # Endpoints
//!
//! ## Shipping
//! - `POST /api/v1/shipping/quote` - Compute carrier quotes for a postal code
//!
//! ## Variants
//! - `GET /api/v1/variants/{product_id}` - Color name and SKU of a variant
//!   (an independent catalog lookup, not part of the quote engine)
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use ship_quote::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(service, catalog));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, HealthResponse, VariantInfoResponse};
pub use routes::create_router;
