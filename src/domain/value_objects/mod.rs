//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`RequestId`], [`AddressId`], [`LineSetId`]: UUID-based identifiers for
//!   one request's transient state
//! - [`ProductId`], [`CartId`], [`CarrierId`]: string-based references to
//!   external collaborators
//!
//! ## Validated Types
//!
//! - [`PostalCode`]: trimmed, uppercased, minimum-length checked
//! - [`Quantity`]: integer quantity, at least one
//! - [`Price`]: non-negative decimal with numeric ordering
//! - [`Currency`]: storefront currency code plus display symbol
//! - [`CountryCode`]: two-letter uppercase country code

pub mod country;
pub mod currency;
pub mod ids;
pub mod postal_code;
pub mod price;
pub mod quantity;
pub mod timestamp;

pub use country::CountryCode;
pub use currency::Currency;
pub use ids::{AddressId, CarrierId, CartId, LineSetId, ProductId, RequestId};
pub use postal_code::PostalCode;
pub use price::Price;
pub use quantity::Quantity;
pub use timestamp::Timestamp;
