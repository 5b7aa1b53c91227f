//! # Cart Projection
//!
//! Read-only view of the caller's cart, as served by the cart store.
//!
//! The engine copies non-shipping lines out of this projection into a
//! sandbox line set. It never writes back; prior shipping lines (a carrier
//! the buyer already picked) are excluded so they don't distort the rate.

use crate::domain::value_objects::{CartId, Price, ProductId, Quantity};
use serde::{Deserialize, Serialize};

/// One line of the caller's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_ref: ProductId,
    quantity: Quantity,
    unit_price: Price,
    is_shipping: bool,
}

impl CartLine {
    /// Creates a product line.
    #[must_use]
    pub fn new(product_ref: ProductId, quantity: Quantity, unit_price: Price) -> Self {
        Self {
            product_ref,
            quantity,
            unit_price,
            is_shipping: false,
        }
    }

    /// Creates a shipping line (an already-selected delivery method).
    #[must_use]
    pub fn shipping(product_ref: ProductId, unit_price: Price) -> Self {
        Self {
            product_ref,
            quantity: Quantity::one(),
            unit_price,
            is_shipping: true,
        }
    }

    /// Returns the product reference.
    #[must_use]
    pub fn product_ref(&self) -> &ProductId {
        &self.product_ref
    }

    /// Returns the line quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the unit price.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// True for delivery-method lines, which are never copied into a sandbox.
    #[must_use]
    pub fn is_shipping(&self) -> bool {
        self.is_shipping
    }
}

/// The caller's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a cart projection.
    #[must_use]
    pub fn new(id: CartId, lines: Vec<CartLine>) -> Self {
        Self { id, lines }
    }

    /// Returns the cart identifier.
    #[must_use]
    pub fn id(&self) -> &CartId {
        &self.id
    }

    /// Returns all lines, shipping lines included.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns only the lines eligible for copying into a sandbox.
    pub fn non_shipping_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(|l| !l.is_shipping())
    }
}
