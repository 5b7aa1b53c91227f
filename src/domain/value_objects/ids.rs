//! # Identifier Value Objects
//!
//! Typed identifiers for sandbox entities and external references.
//!
//! Sandbox identifiers ([`AddressId`], [`LineSetId`], [`RequestId`]) are
//! freshly generated UUIDs, never derived from caller input, so two
//! concurrent requests can never produce colliding sandbox keys.
//! External references ([`ProductId`], [`CartId`], [`CarrierId`]) are opaque
//! strings owned by the respective collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the inner UUID.
            #[must_use]
            pub fn get(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a string value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id! {
    /// Identifier for one quote request's transient state.
    RequestId
}

uuid_id! {
    /// Identifier for a sandbox address.
    AddressId
}

uuid_id! {
    /// Identifier for a sandbox line set.
    LineSetId
}

string_id! {
    /// Reference to a product in the storefront catalog.
    ProductId
}

string_id! {
    /// Reference to a cart in the cart store.
    CartId
}

string_id! {
    /// Reference to a carrier in the carrier registry.
    CarrierId
}
