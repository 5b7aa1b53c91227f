//! # REST Handlers
//!
//! Request handlers for the storefront-facing endpoints.
//!
//! The shipping handler always answers `200 OK` with a [`QuoteResult`]
//! body: validation problems and all-carriers-failed runs are expressed
//! through `success = false`, which is the contract storefront scripts
//! consume. Only the variant lookup uses HTTP status codes, since a missing
//! product is a real 404.

use crate::application::services::formatter::QuoteResult;
use crate::application::services::validator::RawQuoteRequest;
use crate::application::use_cases::compute_quote::ShippingQuoteService;
use crate::domain::value_objects::ProductId;
use crate::infrastructure::persistence::traits::ProductCatalog;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Shared state for the REST handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The quote engine.
    pub quote_service: ShippingQuoteService,
    /// Catalog for the variant-info lookup.
    pub catalog: Arc<dyn ProductCatalog>,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub fn new(quote_service: ShippingQuoteService, catalog: Arc<dyn ProductCatalog>) -> Self {
        Self {
            quote_service,
            catalog,
        }
    }
}

/// Error body for non-200 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-safe error description.
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
}

/// Variant info body: color name and SKU of one product variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantInfoResponse {
    /// The variant's identifier, echoed.
    pub product_id: String,
    /// Color attribute value, empty when the variant has none.
    pub color_name: String,
    /// Internal reference / SKU, empty when unset.
    pub sku: String,
}

/// `POST /api/v1/shipping/quote`
pub async fn compute_shipping_quote(
    State(state): State<Arc<AppState>>,
    Json(raw): Json<RawQuoteRequest>,
) -> Json<QuoteResult> {
    Json(state.quote_service.compute_shipping_quote(raw).await)
}

/// `GET /api/v1/variants/{product_id}`
pub async fn get_variant_info(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> Result<Json<VariantInfoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = ProductId::new(&product_id);
    match state.catalog.get_product(&id).await {
        Ok(Some(product)) => Ok(Json(VariantInfoResponse {
            product_id,
            color_name: product.color_name().unwrap_or_default().to_string(),
            sku: product.sku().unwrap_or_default().to_string(),
        })),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "product not found".to_string(),
            }),
        )),
        Err(e) => {
            error!(product_id = %id, error = %e, "variant lookup failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "catalog unavailable".to_string(),
                }),
            ))
        }
    }
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::product::ProductRecord;
    use crate::domain::value_objects::Price;
    use crate::infrastructure::carriers::registry::StaticCarrierRegistry;
    use crate::infrastructure::persistence::in_memory::{
        InMemoryCartStore, InMemoryProductCatalog, InMemorySandboxStore,
    };
    use crate::infrastructure::settings::StorefrontSettings;
    use rust_decimal_macros::dec;

    fn state_with_catalog(catalog: InMemoryProductCatalog) -> Arc<AppState> {
        let service = ShippingQuoteService::new(
            Arc::new(StaticCarrierRegistry::new()),
            Arc::new(InMemorySandboxStore::new()),
            Arc::new(InMemoryCartStore::new()),
            Arc::new(catalog.clone()),
            &StorefrontSettings::default(),
        );
        Arc::new(AppState::new(service, Arc::new(catalog)))
    }

    #[tokio::test]
    async fn variant_info_for_known_product() {
        let catalog = InMemoryProductCatalog::new();
        catalog
            .put_product(
                ProductRecord::new(
                    ProductId::new("42"),
                    "Shirt (Red)",
                    Price::new(dec!(100)).unwrap(),
                )
                .with_sku("SH-RED-M")
                .with_color("Red"),
            )
            .await;
        let state = state_with_catalog(catalog);

        let Json(response) = get_variant_info(State(state), Path("42".to_string()))
            .await
            .unwrap();
        assert_eq!(response.color_name, "Red");
        assert_eq!(response.sku, "SH-RED-M");
        assert_eq!(response.product_id, "42");
    }

    #[tokio::test]
    async fn variant_info_missing_product_is_404() {
        let state = state_with_catalog(InMemoryProductCatalog::new());
        let result = get_variant_info(State(state), Path("nope".to_string())).await;
        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn quote_endpoint_returns_failure_body_not_http_error() {
        let state = state_with_catalog(InMemoryProductCatalog::new());
        let Json(result) = compute_shipping_quote(
            State(state),
            Json(RawQuoteRequest::for_product("12", "SKU-1")),
        )
        .await;
        assert!(!result.success);
        assert!(result.error_message.is_some());
    }
}
