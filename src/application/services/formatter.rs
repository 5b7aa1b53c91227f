//! # Result Formatter
//!
//! Sorts successful quotes and composes the caller-facing response.
//!
//! Options are ordered by numeric price ascending with carrier name as the
//! tie-break. When no carrier quoted, the response is `success = false` with
//! a generic message; the recorded per-carrier reasons stay in the operator
//! log and are never surfaced verbatim.

use crate::application::services::rate_aggregation::AggregationOutcome;
use crate::domain::entities::carrier_quote::CarrierQuote;
use crate::domain::value_objects::PostalCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Generic message when no shipping option could be computed.
pub const NO_OPTIONS_MESSAGE: &str =
    "No shipping methods are available for this postal code. Please try again later.";

/// One shipping option in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOption {
    /// Carrier display name.
    pub carrier_name: String,
    /// Price in the storefront currency.
    pub price: Decimal,
    /// Currency code.
    pub currency: String,
    /// Currency display symbol.
    pub currency_symbol: String,
    /// Delivery window, when the carrier reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_window: Option<String>,
}

impl From<&CarrierQuote> for QuoteOption {
    fn from(quote: &CarrierQuote) -> Self {
        Self {
            carrier_name: quote.carrier_name().to_string(),
            price: quote.price().get(),
            currency: quote.currency().code().to_string(),
            currency_symbol: quote.currency().symbol().to_string(),
            delivery_window: quote.delivery_window().map(str::to_string),
        }
    }
}

/// The caller-facing result of one quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// True when at least one carrier quoted.
    pub success: bool,
    /// The normalized postal code the quotes are for.
    pub postal_code: String,
    /// Shipping options, cheapest first.
    pub options: Vec<QuoteOption>,
    /// Generic user-facing message when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl QuoteResult {
    /// A failure result with a generic message.
    #[must_use]
    pub fn failure(postal_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            postal_code: postal_code.into(),
            options: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    /// Returns the cheapest option, if any.
    #[must_use]
    pub fn cheapest(&self) -> Option<&QuoteOption> {
        self.options.first()
    }
}

/// Composes the final [`QuoteResult`] from an aggregation outcome.
#[derive(Debug, Clone, Default)]
pub struct ResultFormatter;

impl ResultFormatter {
    /// Creates a formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Sorts the quotes and decides overall success.
    #[must_use]
    pub fn format(&self, postal_code: &PostalCode, outcome: &AggregationOutcome) -> QuoteResult {
        if outcome.quotes.is_empty() {
            info!(
                postal_code = %postal_code,
                carrier_failures = outcome.failures.len(),
                "no shipping options produced"
            );
            return QuoteResult::failure(postal_code.as_str(), NO_OPTIONS_MESSAGE);
        }

        let mut sorted: Vec<CarrierQuote> = outcome.quotes.clone();
        sorted.sort_by(|a, b| a.presentation_cmp(b));

        QuoteResult {
            success: true,
            postal_code: postal_code.as_str().to_string(),
            options: sorted.iter().map(QuoteOption::from).collect(),
            error_message: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::carrier_quote::CarrierFailure;
    use crate::domain::value_objects::{CarrierId, Currency, Price};
    use rust_decimal_macros::dec;

    fn quote(name: &str, price: Decimal) -> CarrierQuote {
        CarrierQuote::new(
            CarrierId::new(name.to_lowercase()),
            name,
            Price::new(price).unwrap(),
            Currency::new("ARS", "$"),
            None,
        )
    }

    fn postal() -> PostalCode {
        PostalCode::new("1425").unwrap()
    }

    #[test]
    fn sorts_ascending_by_price() {
        let outcome = AggregationOutcome {
            quotes: vec![
                quote("Express", dec!(250)),
                quote("Standard", dec!(150)),
                quote("Premium", dec!(400)),
            ],
            failures: vec![],
        };

        let result = ResultFormatter::new().format(&postal(), &outcome);
        assert!(result.success);
        assert_eq!(result.postal_code, "1425");
        let names: Vec<&str> = result
            .options
            .iter()
            .map(|o| o.carrier_name.as_str())
            .collect();
        assert_eq!(names, vec!["Standard", "Express", "Premium"]);
        assert_eq!(result.cheapest().unwrap().price, dec!(150));
    }

    #[test]
    fn ties_break_on_carrier_name() {
        let outcome = AggregationOutcome {
            quotes: vec![quote("Zeta", dec!(150)), quote("Alpha", dec!(150))],
            failures: vec![],
        };

        let result = ResultFormatter::new().format(&postal(), &outcome);
        assert_eq!(result.options[0].carrier_name, "Alpha");
        assert_eq!(result.options[1].carrier_name, "Zeta");
    }

    #[test]
    fn price_order_is_numeric() {
        let outcome = AggregationOutcome {
            quotes: vec![quote("Ten", dec!(10)), quote("NinePointFive", dec!(9.5))],
            failures: vec![],
        };

        let result = ResultFormatter::new().format(&postal(), &outcome);
        assert_eq!(result.options[0].carrier_name, "NinePointFive");
    }

    #[test]
    fn serializes_without_null_noise() {
        let outcome = AggregationOutcome {
            quotes: vec![quote("Standard", dec!(150))],
            failures: vec![],
        };
        let result = ResultFormatter::new().format(&postal(), &outcome);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error_message").is_none());
        assert!(json["options"][0].get("delivery_window").is_none());
    }

    #[test]
    fn empty_outcome_is_a_generic_failure() {
        let outcome = AggregationOutcome {
            quotes: vec![],
            failures: vec![CarrierFailure::new(
                CarrierId::new("standard"),
                "Standard",
                "zone table corrupt at /etc/carriers/zones.csv",
            )],
        };

        let result = ResultFormatter::new().format(&postal(), &outcome);
        assert!(!result.success);
        assert!(result.options.is_empty());
        // internal reason must never leak into the response
        let message = result.error_message.unwrap();
        assert!(!message.contains("zones.csv"));
        assert_eq!(message, NO_OPTIONS_MESSAGE);
    }
}
