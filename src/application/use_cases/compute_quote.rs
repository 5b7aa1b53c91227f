//! # Compute Shipping Quote
//!
//! The single public operation of the engine, driving one request through
//!
//! ```text
//! Validating → BuildingContext → Aggregating → Reclaiming → Formatting → Done
//! ```
//!
//! Reclaiming is reachable from BuildingContext and Aggregating on any
//! failure and is always traversed before a result or error is surfaced:
//! the use case builds the sandbox, runs everything that touches it inside
//! one guarded section, and reclaims before it inspects the outcome. The
//! aggregator itself is infallible (per-carrier failures are data), so the
//! only way to skip reclamation would be a panic in this function between
//! build and reclaim — and nothing in between can panic.

use crate::application::error::{QuoteError, QuoteResultType};
use crate::application::services::context_builder::SandboxContextBuilder;
use crate::application::services::formatter::{QuoteResult, ResultFormatter};
use crate::application::services::rate_aggregation::{AggregationOutcome, CarrierRateAggregator};
use crate::application::services::reclaimer::SandboxReclaimer;
use crate::application::services::validator::{QuoteRequestValidator, RawQuoteRequest};
use crate::domain::entities::sandbox::SandboxContext;
use crate::infrastructure::carriers::registry::CarrierRegistry;
use crate::infrastructure::carriers::traits::ShipmentContext;
use crate::infrastructure::persistence::traits::{CartStore, ProductCatalog, SandboxStore};
use crate::infrastructure::settings::StorefrontSettings;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// The shipping quote engine.
///
/// Construct one per process and share it: all per-request state lives in
/// the request's own [`SandboxContext`], never in the service.
#[derive(Debug, Clone)]
pub struct ShippingQuoteService {
    validator: QuoteRequestValidator,
    builder: SandboxContextBuilder,
    aggregator: CarrierRateAggregator,
    reclaimer: SandboxReclaimer,
    formatter: ResultFormatter,
}

impl ShippingQuoteService {
    /// Wires the pipeline from its collaborators and settings.
    #[must_use]
    pub fn new(
        registry: Arc<dyn CarrierRegistry>,
        sandbox_store: Arc<dyn SandboxStore>,
        cart_store: Arc<dyn CartStore>,
        catalog: Arc<dyn ProductCatalog>,
        settings: &StorefrontSettings,
    ) -> Self {
        Self {
            validator: QuoteRequestValidator::new(settings.min_postal_length),
            builder: SandboxContextBuilder::new(
                Arc::clone(&sandbox_store),
                cart_store,
                catalog,
                settings.country(),
            ),
            aggregator: CarrierRateAggregator::new(
                registry,
                settings.currency(),
                settings.per_carrier_timeout_ms,
            ),
            reclaimer: SandboxReclaimer::new(sandbox_store),
            formatter: ResultFormatter::new(),
        }
    }

    /// Computes shipping quotes, never raising past the request boundary.
    ///
    /// Validation and context-build failures come back as `success = false`
    /// results with a safe message, exactly like an all-carriers-failed run.
    /// This is the contract presentation layers consume.
    #[instrument(skip(self, raw), fields(postal_code = %raw.postal_code))]
    pub async fn compute_shipping_quote(&self, raw: RawQuoteRequest) -> QuoteResult {
        match self.try_compute(&raw).await {
            Ok(result) => result,
            Err(error) => {
                warn!(error = %error, "quote request failed");
                QuoteResult::failure(raw.postal_code.trim().to_uppercase(), error.user_message())
            }
        }
    }

    /// Computes shipping quotes, surfacing pipeline errors to the caller.
    ///
    /// The sandbox is reclaimed before any error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Validation`] for bad input (before any sandbox
    /// entity exists), [`QuoteError::ContextBuild`] when no line source is
    /// available, and [`QuoteError::Repository`] when a store fails.
    pub async fn try_compute(&self, raw: &RawQuoteRequest) -> QuoteResultType<QuoteResult> {
        // Validating: pure, nothing to reclaim on failure.
        let request = self.validator.validate(raw)?;
        debug!(request_id = %request.id(), "request validated");

        // BuildingContext and Aggregating both run against the sandbox, so
        // both are guarded by the reclaim below.
        let mut ctx = SandboxContext::new(request.id());
        let guarded: QuoteResultType<AggregationOutcome> = async {
            self.builder.build(&mut ctx, &request).await?;

            let shipment = match (ctx.address(), ctx.line_set()) {
                (Some(address), Some(line_set)) => {
                    ShipmentContext::new(address.clone(), line_set.clone())
                }
                // build() attached both on success; treat anything else as
                // an internal fault rather than quoting on half a context
                _ => {
                    return Err(QuoteError::Internal(
                        "sandbox context incomplete after build".to_string(),
                    ));
                }
            };

            Ok(self.aggregator.collect(shipment).await)
        }
        .await;

        // Reclaiming: every path goes through here, success or not.
        self.reclaimer.reclaim(&mut ctx).await;

        let outcome = guarded?;

        // Formatting.
        Ok(self.formatter.format(request.postal_code(), &outcome))
    }
}
