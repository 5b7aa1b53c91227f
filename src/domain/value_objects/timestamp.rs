//! # Timestamp Value Object
//!
//! UTC timestamp for sandbox entity bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>`; used to record when sandbox entities were
/// created and reclaimed, mainly for operator logs.
///
/// # Examples
///
/// ```
/// use ship_quote::domain::value_objects::Timestamp;
///
/// let a = Timestamp::now();
/// let b = Timestamp::now();
/// assert!(!b.is_before(&a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Returns true if this timestamp is strictly before `other`.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    /// Returns the inner `DateTime<Utc>`.
    #[must_use]
    pub fn get(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
