//! # Carrier Adapter Port
//!
//! Trait every carrier integration implements, plus the context and result
//! types it works with.
//!
//! # Examples
//!
//! ```ignore
//! use ship_quote::infrastructure::carriers::traits::{CarrierAdapter, RateQuote};
//!
//! struct MyCarrier { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl CarrierAdapter for MyCarrier {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::sandbox::{SandboxAddress, SandboxLineSet};
use crate::domain::value_objects::{CarrierId, Price};
use crate::infrastructure::carriers::error::CarrierResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The shipment a carrier prices: one sandbox address plus one sandbox line
/// set.
///
/// Each carrier task receives a shared, immutable snapshot; no carrier can
/// observe another's execution through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentContext {
    address: SandboxAddress,
    line_set: SandboxLineSet,
}

impl ShipmentContext {
    /// Creates a shipment context from sandbox entities.
    #[must_use]
    pub fn new(address: SandboxAddress, line_set: SandboxLineSet) -> Self {
        Self { address, line_set }
    }

    /// Returns the destination address.
    #[must_use]
    pub fn address(&self) -> &SandboxAddress {
        &self.address
    }

    /// Returns the priced lines.
    #[must_use]
    pub fn line_set(&self) -> &SandboxLineSet {
        &self.line_set
    }
}

/// A successful rate computation from one carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    price: Price,
    delivery_window: Option<String>,
}

impl RateQuote {
    /// Creates a rate quote.
    #[must_use]
    pub fn new(price: Price) -> Self {
        Self {
            price,
            delivery_window: None,
        }
    }

    /// Sets the delivery window (e.g. `"3-5 business days"`).
    #[must_use]
    pub fn with_delivery_window(mut self, window: impl Into<String>) -> Self {
        self.delivery_window = Some(window.into());
        self
    }

    /// Returns the computed price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the delivery window, if reported.
    #[must_use]
    pub fn delivery_window(&self) -> Option<&str> {
        self.delivery_window.as_deref()
    }
}

/// Port for shipping-cost providers.
///
/// Implementations must be side-effect free with respect to the shipment
/// context: they read the address and lines, they never mutate storefront
/// state. Rate computation failures are returned as errors, not panics —
/// though the aggregator survives panicking adapters too.
#[async_trait]
pub trait CarrierAdapter: Send + Sync + std::fmt::Debug {
    /// Returns the carrier's identifier.
    fn carrier_id(&self) -> &CarrierId;

    /// Returns the carrier's display name.
    fn name(&self) -> &str;

    /// Returns true when the carrier may be offered to anonymous storefront
    /// visitors.
    fn is_published(&self) -> bool {
        true
    }

    /// Computes a shipping rate for the given shipment.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::infrastructure::carriers::error::CarrierError`]
    /// when this carrier cannot price the shipment. The error aborts only
    /// this carrier's quote, never the request.
    async fn rate_shipment(&self, shipment: &ShipmentContext) -> CarrierResult<RateQuote>;
}
