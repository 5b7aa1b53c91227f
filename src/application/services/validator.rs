//! # Quote Request Validator
//!
//! Input-shape validation, before any side effect.
//!
//! Validation happens entirely in memory: a rejected request leaves nothing
//! to reclaim, which the pipeline tests assert directly.

use crate::application::error::{QuoteError, QuoteResultType};
use crate::domain::entities::quote_request::{QuoteRequest, QuoteRequestBuilder};
use crate::domain::value_objects::{CartId, ProductId};
use serde::{Deserialize, Serialize};

/// The raw, unvalidated inputs of `compute_shipping_quote`.
///
/// This is the wire shape the REST adapter deserializes; the validator turns
/// it into a [`QuoteRequest`] or rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawQuoteRequest {
    /// Destination postal code, as typed by the buyer.
    pub postal_code: String,
    /// Product to quote for, when no cart exists.
    #[serde(default)]
    pub product_ref: Option<String>,
    /// Quantity of the product; defaults to 1.
    #[serde(default)]
    pub quantity: Option<i64>,
    /// The buyer's existing cart, if any.
    #[serde(default)]
    pub cart_ref: Option<String>,
}

impl RawQuoteRequest {
    /// Convenience constructor for a single-product request.
    #[must_use]
    pub fn for_product(postal_code: impl Into<String>, product_ref: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            product_ref: Some(product_ref.into()),
            quantity: None,
            cart_ref: None,
        }
    }

    /// Convenience constructor for an existing-cart request.
    #[must_use]
    pub fn for_cart(postal_code: impl Into<String>, cart_ref: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            product_ref: None,
            quantity: None,
            cart_ref: Some(cart_ref.into()),
        }
    }
}

/// Validates raw request inputs against storefront limits.
#[derive(Debug, Clone)]
pub struct QuoteRequestValidator {
    min_postal_length: usize,
}

impl QuoteRequestValidator {
    /// Creates a validator with the storefront's minimum postal code length.
    #[must_use]
    pub fn new(min_postal_length: usize) -> Self {
        Self { min_postal_length }
    }

    /// Validates the inputs and produces a [`QuoteRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Validation`] when the postal code is shorter
    /// than the minimum or the quantity is below one. No side effects occur
    /// on either path.
    pub fn validate(&self, raw: &RawQuoteRequest) -> QuoteResultType<QuoteRequest> {
        let mut builder = QuoteRequestBuilder::new(&raw.postal_code)
            .min_postal_length(self.min_postal_length)
            .quantity(raw.quantity.unwrap_or(1));

        if let Some(product) = &raw.product_ref {
            builder = builder.product(ProductId::new(product));
        }
        if let Some(cart) = &raw.cart_ref {
            builder = builder.cart(CartId::new(cart));
        }

        builder.build().map_err(QuoteError::from)
    }
}
