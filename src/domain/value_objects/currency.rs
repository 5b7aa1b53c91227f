//! # Currency Value Object
//!
//! Storefront display currency.
//!
//! The engine performs no conversion: every quote is returned in the
//! storefront's configured currency, code and symbol included so the
//! presentation layer can render either.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The currency quotes are expressed in.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::Currency;
///
/// let ars = Currency::new("ARS", "$");
/// assert_eq!(ars.code(), "ARS");
/// assert_eq!(ars.symbol(), "$");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    symbol: String,
}

impl Currency {
    /// Creates a currency from its code and display symbol.
    #[must_use]
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
        }
    }

    /// Returns the currency code (e.g. `ARS`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display symbol (e.g. `$`).
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
