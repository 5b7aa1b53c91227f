//! # Infrastructure Layer
//!
//! Adapters and ports around the domain:
//!
//! - [`carriers`]: the carrier adapter port, registry, and concrete rate
//!   adapters
//! - [`persistence`]: sandbox store, cart store, and product catalog ports
//!   with in-memory implementations
//! - [`settings`]: storefront configuration (country, currency, limits)

pub mod carriers;
pub mod persistence;
pub mod settings;
