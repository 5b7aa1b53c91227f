//! # Quote Request
//!
//! The validated input to one shipping quote computation.
//!
//! The "currently selected product" of the storefront UI is an explicit
//! parameter here; nothing in the engine reads implicit session state.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::entities::quote_request::QuoteRequestBuilder;
//! use ship_quote::domain::value_objects::ProductId;
//!
//! let request = QuoteRequestBuilder::new("1425")
//!     .product(ProductId::new("SKU-1"))
//!     .quantity(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.quantity().get(), 3);
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{CartId, PostalCode, ProductId, Quantity, RequestId};
use serde::{Deserialize, Serialize};

/// A validated shipping quote request.
///
/// # Invariants
///
/// - `postal_code` meets the minimum length
/// - `quantity` >= 1
///
/// Whether a cart, a product, or neither is referenced is *not* validated
/// here: the context builder decides, because an existing cart makes the
/// product reference optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    id: RequestId,
    postal_code: PostalCode,
    product_ref: Option<ProductId>,
    quantity: Quantity,
    cart_ref: Option<CartId>,
}

impl QuoteRequest {
    /// Returns the request identifier.
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the destination postal code.
    #[must_use]
    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    /// Returns the product reference, if one was supplied.
    #[must_use]
    pub fn product_ref(&self) -> Option<&ProductId> {
        self.product_ref.as_ref()
    }

    /// Returns the requested quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the cart reference, if one was supplied.
    #[must_use]
    pub fn cart_ref(&self) -> Option<&CartId> {
        self.cart_ref.as_ref()
    }
}

/// Builder for [`QuoteRequest`].
#[derive(Debug, Clone)]
pub struct QuoteRequestBuilder {
    postal_code: String,
    min_postal_length: usize,
    product_ref: Option<ProductId>,
    quantity: i64,
    cart_ref: Option<CartId>,
}

impl QuoteRequestBuilder {
    /// Starts a builder for the given raw postal code.
    #[must_use]
    pub fn new(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: postal_code.into(),
            min_postal_length: PostalCode::MIN_LENGTH,
            product_ref: None,
            quantity: 1,
            cart_ref: None,
        }
    }

    /// Overrides the storefront's minimum postal code length.
    #[must_use]
    pub fn min_postal_length(mut self, min: usize) -> Self {
        self.min_postal_length = min;
        self
    }

    /// Sets the product to quote for.
    #[must_use]
    pub fn product(mut self, product_ref: ProductId) -> Self {
        self.product_ref = Some(product_ref);
        self
    }

    /// Sets the quantity (validated at build time).
    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the caller's existing cart.
    #[must_use]
    pub fn cart(mut self, cart_ref: CartId) -> Self {
        self.cart_ref = Some(cart_ref);
        self
    }

    /// Validates the inputs and builds the request.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::domain::errors::DomainError`] when the postal code
    /// is too short or the quantity is below one. No side effects occur on
    /// failure; validation always precedes sandbox creation.
    pub fn build(self) -> DomainResult<QuoteRequest> {
        let postal_code = PostalCode::with_min_length(&self.postal_code, self.min_postal_length)?;
        let quantity = Quantity::from_i64(self.quantity)?;
        Ok(QuoteRequest {
            id: RequestId::new_v4(),
            postal_code,
            product_ref: self.product_ref,
            quantity,
            cart_ref: self.cart_ref,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let request = QuoteRequestBuilder::new("1425").build().unwrap();
        assert_eq!(request.postal_code().as_str(), "1425");
        assert_eq!(request.quantity().get(), 1);
        assert!(request.product_ref().is_none());
        assert!(request.cart_ref().is_none());
    }

    #[test]
    fn rejects_short_postal_code() {
        assert!(QuoteRequestBuilder::new("99").build().is_err());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        assert!(QuoteRequestBuilder::new("1425").quantity(0).build().is_err());
        assert!(
            QuoteRequestBuilder::new("1425")
                .quantity(-2)
                .build()
                .is_err()
        );
    }

    #[test]
    fn honors_configured_minimum_length() {
        let result = QuoteRequestBuilder::new("12345")
            .min_postal_length(6)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn fresh_id_per_request() {
        let a = QuoteRequestBuilder::new("1425").build().unwrap();
        let b = QuoteRequestBuilder::new("1425").build().unwrap();
        assert_ne!(a.id(), b.id());
    }
}
