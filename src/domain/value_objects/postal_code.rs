//! # Postal Code Value Object
//!
//! Validated destination postal code.
//!
//! Raw caller input is trimmed and uppercased before validation, so
//! `" c1425 "` and `"C1425"` are the same postal code. The minimum length is
//! storefront-configurable; [`PostalCode::MIN_LENGTH`] is the default.
//!
//! # Examples
//!
//! ```
//! use ship_quote::domain::value_objects::PostalCode;
//!
//! let code = PostalCode::new(" c1425ape ").unwrap();
//! assert_eq!(code.as_str(), "C1425APE");
//!
//! assert!(PostalCode::new("12").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated destination postal code.
///
/// # Invariants
///
/// - Trimmed of surrounding whitespace, uppercased
/// - At least the minimum length after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Default minimum accepted length.
    pub const MIN_LENGTH: usize = 4;

    /// Creates a postal code with the default minimum length.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPostalCode`] when the trimmed input is
    /// shorter than [`Self::MIN_LENGTH`].
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        Self::with_min_length(raw, Self::MIN_LENGTH)
    }

    /// Creates a postal code with an explicit minimum length.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPostalCode`] when the trimmed input is
    /// shorter than `min_length`.
    pub fn with_min_length(raw: impl AsRef<str>, min_length: usize) -> DomainResult<Self> {
        let normalized = raw.as_ref().trim().to_uppercase();
        if normalized.chars().count() < min_length {
            return Err(DomainError::invalid_postal_code(format!(
                "must be at least {min_length} characters"
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized postal code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_whitespace_and_case() {
        let code = PostalCode::new("  b7600dxe ").unwrap();
        assert_eq!(code.as_str(), "B7600DXE");
    }

    #[test]
    fn rejects_short_codes() {
        assert!(PostalCode::new("123").is_err());
        assert!(PostalCode::new("   12   ").is_err());
    }

    #[test]
    fn custom_minimum_length() {
        assert!(PostalCode::with_min_length("12345", 6).is_err());
        assert!(PostalCode::with_min_length("123456", 6).is_ok());
    }

    #[test]
    fn whitespace_does_not_count_toward_length() {
        // "  1  " trims to one character
        assert!(PostalCode::new("  1  ").is_err());
    }
}
