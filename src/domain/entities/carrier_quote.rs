//! # Carrier Quotes and Failures
//!
//! The two independent outputs of rate aggregation.
//!
//! A [`CarrierQuote`] is immutable and returned directly to the caller; it is
//! never persisted. A [`CarrierFailure`] is diagnostic data for operator
//! logs; its `reason` must never be echoed verbatim to the caller, since
//! carrier error strings can leak internal configuration.

use crate::domain::value_objects::{CarrierId, Currency, Price};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A priced shipping option from one carrier.
///
/// Ordered ascending by price, ties broken by carrier name, which is exactly
/// the order options are presented in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierQuote {
    carrier_id: CarrierId,
    carrier_name: String,
    price: Price,
    currency: Currency,
    delivery_window: Option<String>,
}

impl CarrierQuote {
    /// Creates a quote.
    #[must_use]
    pub fn new(
        carrier_id: CarrierId,
        carrier_name: impl Into<String>,
        price: Price,
        currency: Currency,
        delivery_window: Option<String>,
    ) -> Self {
        Self {
            carrier_id,
            carrier_name: carrier_name.into(),
            price,
            currency,
            delivery_window,
        }
    }

    /// Returns the carrier identifier.
    #[must_use]
    pub fn carrier_id(&self) -> &CarrierId {
        &self.carrier_id
    }

    /// Returns the carrier display name.
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// Returns the quoted price.
    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the quote currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the delivery window, if the carrier reported one.
    #[must_use]
    pub fn delivery_window(&self) -> Option<&str> {
        self.delivery_window.as_deref()
    }

    /// Presentation order: numeric price ascending, then carrier name.
    #[must_use]
    pub fn presentation_cmp(&self, other: &Self) -> Ordering {
        self.price
            .cmp(&other.price)
            .then_with(|| self.carrier_name.cmp(&other.carrier_name))
    }
}

impl fmt::Display for CarrierQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.carrier_name,
            self.currency.symbol(),
            self.price
        )
    }
}

/// A recorded per-carrier failure.
///
/// Never raised as an error: one carrier failing must not abort the
/// aggregation loop or affect any other carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierFailure {
    carrier_id: CarrierId,
    carrier_name: String,
    reason: String,
}

impl CarrierFailure {
    /// Records a failure for one carrier.
    #[must_use]
    pub fn new(
        carrier_id: CarrierId,
        carrier_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            carrier_id,
            carrier_name: carrier_name.into(),
            reason: reason.into(),
        }
    }

    /// Returns the carrier identifier.
    #[must_use]
    pub fn carrier_id(&self) -> &CarrierId {
        &self.carrier_id
    }

    /// Returns the carrier display name.
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// Returns the internal failure reason. Log it; never return it to the
    /// caller.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
