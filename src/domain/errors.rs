//! # Domain Errors
//!
//! Error types for domain-level validation failures.
//!
//! These errors carry no side effects: they are raised before any sandbox
//! entity exists, so there is never anything to reclaim when one occurs.

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Postal code failed validation.
    #[error("invalid postal code: {reason}")]
    InvalidPostalCode {
        /// Why the postal code was rejected.
        reason: String,
    },

    /// Quantity must be at least one.
    #[error("invalid quantity: {value} (must be >= 1)")]
    InvalidQuantity {
        /// The rejected value.
        value: i64,
    },

    /// Price must be non-negative.
    #[error("invalid price: {value} (must be >= 0)")]
    InvalidPrice {
        /// The rejected value, formatted.
        value: String,
    },

    /// Country code must be two uppercase letters.
    #[error("invalid country code: {value}")]
    InvalidCountryCode {
        /// The rejected value.
        value: String,
    },
}

impl DomainError {
    /// Creates an invalid postal code error.
    #[must_use]
    pub fn invalid_postal_code(reason: impl Into<String>) -> Self {
        Self::InvalidPostalCode {
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
