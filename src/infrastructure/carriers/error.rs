//! # Carrier Errors
//!
//! Error types for carrier adapter operations.
//!
//! These errors are *recorded*, never propagated: the aggregator converts
//! each one into a `CarrierFailure` so a broken carrier cannot abort the
//! quote request. Their messages are for operator logs only and must not be
//! echoed verbatim to storefront callers.

use crate::domain::value_objects::CarrierId;
use thiserror::Error;

/// Error type for carrier adapter operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// The carrier did not answer within its timeout.
    #[error("carrier timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The carrier is temporarily unavailable.
    #[error("carrier unavailable: {carrier_id} - {message}")]
    Unavailable {
        /// The carrier.
        carrier_id: CarrierId,
        /// Diagnostic message.
        message: String,
    },

    /// The carrier could not price this shipment.
    #[error("rate computation failed: {message}")]
    RateComputation {
        /// Diagnostic message.
        message: String,
    },

    /// The carrier's own configuration is invalid.
    #[error("carrier misconfigured: {message}")]
    Configuration {
        /// Diagnostic message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a rate computation error.
    #[must_use]
    pub fn rate_computation(message: impl Into<String>) -> Self {
        Self::RateComputation {
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(carrier_id: CarrierId, message: impl Into<String>) -> Self {
        Self::Unavailable {
            carrier_id,
            message: message.into(),
        }
    }
}

/// Result type for carrier adapter operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
