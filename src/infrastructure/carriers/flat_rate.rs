//! # Flat Rate Carrier
//!
//! Fixed-price carrier, the simplest realistic rate rule.
//!
//! Quotes its configured price for any destination, optionally dropping to
//! zero when the shipment value passes a free-shipping threshold.

use crate::domain::value_objects::{CarrierId, Price};
use crate::infrastructure::carriers::error::CarrierResult;
use crate::infrastructure::carriers::traits::{CarrierAdapter, RateQuote, ShipmentContext};
use async_trait::async_trait;

/// A carrier quoting one fixed price.
#[derive(Debug, Clone)]
pub struct FlatRateCarrier {
    carrier_id: CarrierId,
    name: String,
    fixed_price: Price,
    free_over: Option<Price>,
    delivery_window: Option<String>,
    published: bool,
}

impl FlatRateCarrier {
    /// Creates a flat-rate carrier.
    #[must_use]
    pub fn new(carrier_id: CarrierId, name: impl Into<String>, fixed_price: Price) -> Self {
        Self {
            carrier_id,
            name: name.into(),
            fixed_price,
            free_over: None,
            delivery_window: None,
            published: true,
        }
    }

    /// Ships free when the order value reaches `threshold`.
    #[must_use]
    pub fn free_over(mut self, threshold: Price) -> Self {
        self.free_over = Some(threshold);
        self
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
}

#[async_trait]
impl CarrierAdapter for FlatRateCarrier {
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
        let price = match self.free_over {
            Some(threshold) if shipment.line_set().total_value() >= threshold => Price::zero(),
            _ => self.fixed_price,
        };

        let mut quote = RateQuote::new(price);
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

    fn shipment(value: rust_decimal::Decimal) -> ShipmentContext {
        let address = SandboxAddress::new(
            PostalCode::new("1425").unwrap(),
            CountryCode::default_country(),
        );
        let line_set = SandboxLineSet::new(
            address.id(),
            vec![SandboxLine::new(
                ProductId::new("A"),
                Quantity::one(),
                Price::new(value).unwrap(),
            )],
        );
        ShipmentContext::new(address, line_set)
    }

    #[tokio::test]
    async fn quotes_fixed_price() {
        let carrier = FlatRateCarrier::new(
            CarrierId::new("standard"),
            "Standard",
            Price::new(dec!(150)).unwrap(),
        )
        .delivery_window("5-7 business days");

        let quote = carrier.rate_shipment(&shipment(dec!(100))).await.unwrap();
        assert_eq!(quote.price().get(), dec!(150));
        assert_eq!(quote.delivery_window(), Some("5-7 business days"));
    }

    #[tokio::test]
    async fn free_over_threshold() {
        let carrier = FlatRateCarrier::new(
            CarrierId::new("standard"),
            "Standard",
            Price::new(dec!(150)).unwrap(),
        )
        .free_over(Price::new(dec!(1000)).unwrap());

        let quote = carrier.rate_shipment(&shipment(dec!(1500))).await.unwrap();
        assert_eq!(quote.price().get(), dec!(0));
    }
}
