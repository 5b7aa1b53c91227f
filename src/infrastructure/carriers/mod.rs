//! # Carrier Integrations
//!
//! The carrier adapter port, the registry of publicly quotable carriers, and
//! concrete rate adapters.
//!
//! ## Port
//!
//! - [`traits::CarrierAdapter`]: one shipping-cost provider
//! - [`registry::CarrierRegistry`]: lists carriers eligible for public
//!   quoting
//!
//! ## Adapters
//!
//! - [`flat_rate::FlatRateCarrier`]: fixed price, optional free-shipping
//!   threshold
//! - [`tiered::TieredRateCarrier`]: price tiers keyed by total units

pub mod error;
pub mod flat_rate;
pub mod registry;
pub mod tiered;
pub mod traits;

pub use error::{CarrierError, CarrierResult};
pub use registry::{CarrierRegistry, StaticCarrierRegistry};
pub use traits::{CarrierAdapter, RateQuote, ShipmentContext};
