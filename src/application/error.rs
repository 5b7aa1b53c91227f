//! # Application Errors
//!
//! Error taxonomy for the quote pipeline.
//!
//! - [`QuoteError::Validation`]: bad input, raised before any side effect
//! - [`QuoteError::ContextBuild`]: the sandbox line set cannot be
//!   constructed (no product and no cart)
//! - [`QuoteError::Repository`]: a persistence port failed
//! - [`QuoteError::Internal`]: anything unexpected, caught at the request
//!   boundary
//!
//! Per-carrier failures are deliberately *not* here: they are recorded as
//! data (`CarrierFailure`) and never raised. An all-carriers-failed request
//! is a `success = false` result, not an error.

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::traits::RepositoryError;
use thiserror::Error;

/// Error type for the quote pipeline.
#[derive(Debug, Clone, Error)]
pub enum QuoteError {
    /// Input failed validation; no sandbox entity exists yet.
    #[error("validation failed: {0}")]
    Validation(#[from] DomainError),

    /// The sandbox context could not be built.
    #[error("context build failed: {reason}")]
    ContextBuild {
        /// Why the context could not be built.
        reason: String,
    },

    /// A persistence port failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Unexpected failure, converted into a generic result at the boundary.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QuoteError {
    /// Creates a context build error.
    #[must_use]
    pub fn context_build(reason: impl Into<String>) -> Self {
        Self::ContextBuild {
            reason: reason.into(),
        }
    }

    /// A message safe to show the caller. Internal details (repository
    /// failures, carrier configuration) are replaced with a generic line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(domain) => match domain {
                DomainError::InvalidPostalCode { .. } => {
                    "Enter a valid postal code (minimum 4 characters).".to_string()
                }
                DomainError::InvalidQuantity { .. } => {
                    "Quantity must be at least 1.".to_string()
                }
                _ => "Invalid request.".to_string(),
            },
            Self::ContextBuild { .. } => {
                "Add a product or a cart to calculate shipping.".to_string()
            }
            Self::Repository(_) | Self::Internal(_) => {
                "Could not calculate shipping. Please try again.".to_string()
            }
        }
    }
}

/// Result type for the quote pipeline.
pub type QuoteResultType<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_details_never_reach_the_user_message() {
        let err = QuoteError::Repository(RepositoryError::Connection(
            "pg://10.0.0.5 refused".to_string(),
        ));
        assert!(!err.user_message().contains("10.0.0.5"));

        let err = QuoteError::Internal("carrier registry miswired".to_string());
        assert!(!err.user_message().contains("registry"));
    }

    #[test]
    fn validation_messages_are_actionable() {
        let err = QuoteError::Validation(DomainError::invalid_postal_code("too short"));
        assert!(err.user_message().contains("postal code"));
    }
}
