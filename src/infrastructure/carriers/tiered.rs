//! # Tiered Rate Carrier
//!
//! Prices by total shipped units against a configured tier table.
//!
//! A shipment exceeding the top tier is a per-carrier failure: the carrier
//! declines to quote, the request continues with the remaining carriers.

use crate::domain::value_objects::{CarrierId, Price};
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::traits::{CarrierAdapter, RateQuote, ShipmentContext};
use async_trait::async_trait;

/// One pricing tier: shipments up to `max_units` cost `price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTier {
    /// Largest unit count this tier covers.
    pub max_units: u64,
    /// Price for shipments within this tier.
    pub price: Price,
}

/// A carrier pricing from a unit-count tier table.
#[derive(Debug, Clone)]
pub struct TieredRateCarrier {
    carrier_id: CarrierId,
    name: String,
    tiers: Vec<RateTier>,
    delivery_window: Option<String>,
    published: bool,
}

impl TieredRateCarrier {
    /// Creates a tiered carrier. Tiers are sorted by `max_units` ascending.
    #[must_use]
    pub fn new(carrier_id: CarrierId, name: impl Into<String>, mut tiers: Vec<RateTier>) -> Self {
        tiers.sort_by_key(|t| t.max_units);
        Self {
            carrier_id,
            name: name.into(),
            tiers,
            delivery_window: None,
            published: true,
        }
    }

    /// Sets the advertised delivery window.
    #[must_use]
    pub fn delivery_window(mut self, window: impl Into<String>) -> Self {
        self.delivery_window = Some(window.into());
        self
    }

    /// Sets whether the carrier is offered publicly.
    #[must_use]
    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    fn tier_for(&self, units: u64) -> Option<&RateTier> {
        self.tiers.iter().find(|t| units <= t.max_units)
    }
}

#[async_trait]
impl CarrierAdapter for TieredRateCarrier {
    fn carrier_id(&self) -> &CarrierId {
        &self.carrier_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_published(&self) -> bool {
        self.published
    }

    async fn rate_shipment(&self, shipment: &ShipmentContext) -> CarrierResult<RateQuote> {
        if self.tiers.is_empty() {
            return Err(CarrierError::Configuration {
                message: "no rate tiers configured".to_string(),
            });
        }

        let units = shipment.line_set().total_units();
        let tier = self.tier_for(units).ok_or_else(|| {
            CarrierError::rate_computation(format!(
                "{units} units exceed the largest tier for destination {}",
                shipment.address().postal_code()
            ))
        })?;

        let mut quote = RateQuote::new(tier.price);
        if let Some(window) = &self.delivery_window {
            quote = quote.with_delivery_window(window.clone());
        }
        Ok(quote)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::sandbox::{SandboxAddress, SandboxLine, SandboxLineSet};
    use crate::domain::value_objects::{CountryCode, PostalCode, ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn shipment(units: u32) -> ShipmentContext {
        let address = SandboxAddress::new(
            PostalCode::new("1425").unwrap(),
            CountryCode::default_country(),
        );
        let line_set = SandboxLineSet::new(
            address.id(),
            vec![SandboxLine::new(
                ProductId::new("A"),
                Quantity::new(units).unwrap(),
                Price::new(dec!(10)).unwrap(),
            )],
        );
        ShipmentContext::new(address, line_set)
    }

    fn carrier() -> TieredRateCarrier {
        TieredRateCarrier::new(
            CarrierId::new("express"),
            "Express",
            vec![
                RateTier {
                    max_units: 10,
                    price: Price::new(dec!(400)).unwrap(),
                },
                RateTier {
                    max_units: 3,
                    price: Price::new(dec!(250)).unwrap(),
                },
            ],
        )
    }

    #[tokio::test]
    async fn picks_the_smallest_covering_tier() {
        let quote = carrier().rate_shipment(&shipment(2)).await.unwrap();
        assert_eq!(quote.price().get(), dec!(250));

        let quote = carrier().rate_shipment(&shipment(7)).await.unwrap();
        assert_eq!(quote.price().get(), dec!(400));
    }

    #[tokio::test]
    async fn declines_oversized_shipments() {
        let result = carrier().rate_shipment(&shipment(11)).await;
        assert!(matches!(result, Err(CarrierError::RateComputation { .. })));
    }

    #[tokio::test]
    async fn empty_tier_table_is_a_configuration_error() {
        let carrier = TieredRateCarrier::new(CarrierId::new("broken"), "Broken", vec![]);
        let result = carrier.rate_shipment(&shipment(1)).await;
        assert!(matches!(result, Err(CarrierError::Configuration { .. })));
    }
}
