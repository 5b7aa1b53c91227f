//! # Price Value Object
//!
//! Non-negative decimal money amount.
//!
//! Quotes are sorted by *numeric* price ascending, so [`Price`] implements
//! `Ord` over the underlying [`Decimal`] rather than any string form.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::Price;
//! use rust_decimal::Decimal;
//!
//! let a = Price::new(Decimal::new(1500, 1)).unwrap(); // 150.0
//! let b = Price::new(Decimal::from(250)).unwrap();
//! assert!(a < b);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount.
///
/// # Invariants
///
/// - Never negative; zero is allowed (free shipping exists)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Creates a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPrice`] when the amount is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() {
            return Err(DomainError::InvalidPrice {
                value: amount.to_string(),
            });
        }
        Ok(Self(amount))
    }

    /// A zero price.
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the inner decimal amount.
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Checked multiplication by an integer quantity.
    #[must_use]
    pub fn checked_mul_qty(&self, qty: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_negative_amounts() {
        assert!(Price::new(dec!(-0.01)).is_err());
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn orders_numerically() {
        let small = Price::new(dec!(9.5)).unwrap();
        let large = Price::new(dec!(10)).unwrap();
        // lexical comparison would put "10" before "9.5"
        assert!(small < large);
    }

    #[test]
    fn multiplies_by_quantity() {
        let unit = Price::new(dec!(50)).unwrap();
        assert_eq!(unit.checked_mul_qty(2).unwrap().get(), dec!(100));
    }
}
