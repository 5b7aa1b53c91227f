//! # Quantity Value Object
//!
//! Integer quantity, at least one.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A positive integer quantity of a product.
///
/// # Invariants
///
/// - Always >= 1
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::Quantity;
///
/// let qty = Quantity::new(2).unwrap();
/// assert_eq!(qty.get(), 2);
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuantity`] when `value` is zero.
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::InvalidQuantity { value: 0 });
        }
        Ok(Self(value))
    }

    /// Creates a quantity from a possibly-negative caller integer.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuantity`] when `value` is below one.
    pub fn from_i64(value: i64) -> DomainResult<Self> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v >= 1)
            .map(Self)
            .ok_or(DomainError::InvalidQuantity { value })
    }

    /// A quantity of one, the default for single-product quotes.
    #[must_use]
    pub fn one() -> Self {
        Self(1)
    }

    /// Returns the inner value.
    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::one()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
