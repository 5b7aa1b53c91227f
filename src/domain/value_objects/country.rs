//! # Country Code Value Object
//!
//! Two-letter destination country code.
//!
//! Carriers key their zone rules on the destination country; the sandbox
//! address always carries one, falling back to the process-wide default when
//! the storefront has none configured.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-letter uppercase country code.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::CountryCode;
///
/// let ar = CountryCode::new("ar").unwrap();
/// assert_eq!(ar.as_str(), "AR");
/// assert!(CountryCode::new("ARG").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Fallback used when the storefront has no country configured.
    pub const DEFAULT: &'static str = "AR";

    /// Creates a country code, uppercasing the input.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCountryCode`] unless the input is
    /// exactly two ASCII letters.
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let raw = raw.as_ref().trim();
        if raw.len() != 2 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode {
                value: raw.to_string(),
            });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// The process-wide default country.
    #[must_use]
    pub fn default_country() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_valid_codes() {
        assert_eq!(CountryCode::new("br").unwrap().as_str(), "BR");
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("A1").is_err());
        assert!(CountryCode::new("ARG").is_err());
    }

    #[test]
    fn default_is_argentina() {
        assert_eq!(CountryCode::default_country().as_str(), "AR");
    }
}
