//! # Carrier Rate Aggregation
//!
//! Collects rates from every publicly quotable carrier, isolating each
//! carrier's execution and failure from the others.
//!
//! Each carrier runs in its own spawned task under a per-carrier timeout.
//! An adapter error, a timeout, or a panic becomes a recorded
//! [`CarrierFailure`]; none of them aborts the loop, cancels a sibling, or
//! raises past this service. The aggregator is therefore infallible by
//! construction: its output is always the pair (successes, failures), and
//! an all-failed run is simply an empty success list.

use crate::domain::entities::carrier_quote::{CarrierFailure, CarrierQuote};
use crate::domain::value_objects::Currency;
use crate::infrastructure::carriers::registry::CarrierRegistry;
use crate::infrastructure::carriers::traits::ShipmentContext;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// The two independent outputs of one aggregation run.
#[derive(Debug, Default)]
pub struct AggregationOutcome {
    /// Successful quotes, unsorted (the formatter sorts).
    pub quotes: Vec<CarrierQuote>,
    /// Per-carrier failures, for operator logs only.
    pub failures: Vec<CarrierFailure>,
}

impl AggregationOutcome {
    /// Returns true when no carrier produced a quote.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Collects carrier rates for a sandbox shipment.
#[derive(Debug, Clone)]
pub struct CarrierRateAggregator {
    registry: Arc<dyn CarrierRegistry>,
    currency: Currency,
    per_carrier_timeout_ms: u64,
}

impl CarrierRateAggregator {
    /// Creates an aggregator.
    ///
    /// `currency` is the storefront currency stamped onto every quote; the
    /// engine never converts.
    #[must_use]
    pub fn new(
        registry: Arc<dyn CarrierRegistry>,
        currency: Currency,
        per_carrier_timeout_ms: u64,
    ) -> Self {
        Self {
            registry,
            currency,
            per_carrier_timeout_ms,
        }
    }

    /// Rates the shipment with every eligible carrier.
    ///
    /// Never fails: carriers that error, time out, or panic are recorded in
    /// [`AggregationOutcome::failures`]. Zero eligible carriers yields an
    /// outcome that is empty on both sides.
    pub async fn collect(&self, shipment: ShipmentContext) -> AggregationOutcome {
        let carriers = self.registry.publicly_quotable().await;
        debug!(carriers = carriers.len(), "collecting carrier rates");

        let shipment = Arc::new(shipment);
        let per_carrier_timeout = Duration::from_millis(self.per_carrier_timeout_ms);

        // One task per carrier: each gets its own result slot via its join
        // handle, so no shared buffer is written concurrently.
        let mut handles = Vec::with_capacity(carriers.len());
        for carrier in carriers {
            let shipment = Arc::clone(&shipment);
            let timeout_ms = self.per_carrier_timeout_ms;
            let carrier_id = carrier.carrier_id().clone();
            let carrier_name = carrier.name().to_string();

            let handle = tokio::spawn(async move {
                match timeout(per_carrier_timeout, carrier.rate_shipment(&shipment)).await {
                    Ok(Ok(rate)) => Ok(rate),
                    Ok(Err(e)) => Err(e.to_string()),
                    Err(_) => Err(format!("no answer within {timeout_ms}ms")),
                }
            });
            handles.push((carrier_id, carrier_name, handle));
        }

        let mut outcome = AggregationOutcome::default();
        for (carrier_id, carrier_name, handle) in handles {
            match handle.await {
                Ok(Ok(rate)) => {
                    let quote = CarrierQuote::new(
                        carrier_id,
                        carrier_name,
                        rate.price(),
                        self.currency.clone(),
                        rate.delivery_window().map(str::to_string),
                    );
                    debug!(carrier = quote.carrier_name(), price = %quote.price(), "carrier quoted");
                    outcome.quotes.push(quote);
                }
                Ok(Err(reason)) => {
                    outcome
                        .failures
                        .push(CarrierFailure::new(carrier_id, carrier_name, reason));
                }
                Err(join_error) => {
                    // A panicking adapter must not take the request down.
                    outcome.failures.push(CarrierFailure::new(
                        carrier_id,
                        carrier_name,
                        format!("carrier task panicked: {join_error}"),
                    ));
                }
            }
        }

        for failure in &outcome.failures {
            warn!(
                carrier = failure.carrier_name(),
                reason = failure.reason(),
                "carrier failed to quote"
            );
        }

        outcome
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::entities::sandbox::{SandboxAddress, SandboxLine, SandboxLineSet};
    use crate::domain::value_objects::{
        CarrierId, CountryCode, PostalCode, Price, ProductId, Quantity,
    };
    use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
    use crate::infrastructure::carriers::registry::StaticCarrierRegistry;
    use crate::infrastructure::carriers::traits::{CarrierAdapter, RateQuote};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    #[derive(Debug)]
    enum Behavior {
        Quote(rust_decimal::Decimal),
        Fail,
        Panic,
        Hang,
    }

    #[derive(Debug)]
    struct MockCarrier {
        carrier_id: CarrierId,
        name: String,
        behavior: Behavior,
    }

    impl MockCarrier {
        fn new(name: &str, behavior: Behavior) -> Arc<dyn CarrierAdapter> {
            Arc::new(Self {
                carrier_id: CarrierId::new(name.to_lowercase()),
                name: name.to_string(),
                behavior,
            })
        }
    }

    #[async_trait]
    impl CarrierAdapter for MockCarrier {
        fn carrier_id(&self) -> &CarrierId {
            &self.carrier_id
        }

        fn name(&self) -> &str {
            &self.name
        }

        async fn rate_shipment(&self, _shipment: &ShipmentContext) -> CarrierResult<RateQuote> {
            match &self.behavior {
                Behavior::Quote(price) => Ok(RateQuote::new(Price::new(*price).unwrap())),
                Behavior::Fail => Err(CarrierError::rate_computation("zone table missing")),
                Behavior::Panic => panic!("adapter bug"),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(RateQuote::new(Price::zero()))
                }
            }
        }
    }

    fn shipment() -> ShipmentContext {
        let address = SandboxAddress::new(
            PostalCode::new("1425").unwrap(),
            CountryCode::default_country(),
        );
        let line_set = SandboxLineSet::new(
            address.id(),
            vec![SandboxLine::new(
                ProductId::new("A"),
                Quantity::one(),
                Price::new(dec!(100)).unwrap(),
            )],
        );
        ShipmentContext::new(address, line_set)
    }

    fn aggregator(carriers: Vec<Arc<dyn CarrierAdapter>>) -> CarrierRateAggregator {
        CarrierRateAggregator::new(
            Arc::new(StaticCarrierRegistry::with_carriers(carriers)),
            Currency::new("ARS", "$"),
            200,
        )
    }

    #[tokio::test]
    async fn all_carriers_succeed() {
        let agg = aggregator(vec![
            MockCarrier::new("Standard", Behavior::Quote(dec!(150))),
            MockCarrier::new("Express", Behavior::Quote(dec!(250))),
        ]);

        let outcome = agg.collect(shipment()).await;
        assert_eq!(outcome.quotes.len(), 2);
        assert!(outcome.failures.is_empty());
    }

    #[tokio::test]
    async fn one_failure_does_not_abort_the_rest() {
        let agg = aggregator(vec![
            MockCarrier::new("Flaky", Behavior::Fail),
            MockCarrier::new("Standard", Behavior::Quote(dec!(150))),
        ]);

        let outcome = agg.collect(shipment()).await;
        assert_eq!(outcome.quotes.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].carrier_name(), "Flaky");
    }

    #[tokio::test]
    async fn a_panicking_carrier_is_recorded_not_propagated() {
        let agg = aggregator(vec![
            MockCarrier::new("Buggy", Behavior::Panic),
            MockCarrier::new("Standard", Behavior::Quote(dec!(150))),
        ]);

        let outcome = agg.collect(shipment()).await;
        assert_eq!(outcome.quotes.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].reason().contains("panicked"));
    }

    #[tokio::test]
    async fn a_hanging_carrier_times_out() {
        let agg = aggregator(vec![
            MockCarrier::new("Slow", Behavior::Hang),
            MockCarrier::new("Standard", Behavior::Quote(dec!(150))),
        ]);

        let outcome = agg.collect(shipment()).await;
        assert_eq!(outcome.quotes.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].reason().contains("no answer"));
    }

    #[tokio::test]
    async fn all_failed_is_an_empty_outcome_not_an_error() {
        let agg = aggregator(vec![
            MockCarrier::new("A", Behavior::Fail),
            MockCarrier::new("B", Behavior::Fail),
        ]);

        let outcome = agg.collect(shipment()).await;
        assert!(outcome.is_empty());
        assert_eq!(outcome.failures.len(), 2);
    }

    #[tokio::test]
    async fn zero_carriers_is_empty_on_both_sides() {
        let agg = aggregator(vec![]);
        let outcome = agg.collect(shipment()).await;
        assert!(outcome.is_empty());
        assert!(outcome.failures.is_empty());
    }
}
