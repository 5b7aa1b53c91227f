//! # Ephemeral Shipping Quote Engine
//!
//! Computes carrier shipping costs for a postal code, product, and quantity
//! without leaving any persistent side effect behind.
//!
//! Carrier rate logic needs a realistic context to price against: a shipping
//! address and a set of priced order lines. This crate builds that context as
//! *sandbox* entities — scratch records owned exclusively by one request —
//! runs every eligible carrier against it with per-carrier failure isolation,
//! and reclaims the sandbox on every exit path, including panics inside a
//! carrier adapter.
//!
//! # Pipeline
//!
//! ```text
//! Request → Validator → Context Builder → Aggregator → Reclaimer → Formatter
//!                                          (always reclaimed, on every path)
//! ```
//!
//! # Layers
//!
//! - [`domain`]: value objects and entities (postal codes, prices, sandbox
//!   records, carrier quotes)
//! - [`application`]: the quote pipeline services and the
//!   [`ShippingQuoteService`](application::use_cases::compute_quote::ShippingQuoteService)
//!   use case
//! - [`infrastructure`]: carrier adapters, persistence ports with in-memory
//!   implementations, storefront settings
//! - [`api`]: axum REST adapter for storefront frontends
//!
//! # Example
//!
//! ```ignore
//! use ship_quote::application::use_cases::compute_quote::ShippingQuoteService;
//!
//! let result = service.compute_shipping_quote(request).await;
//! if result.success {
//!     for option in &result.options {
//!         println!("{}: {} {}", option.carrier_name, option.price, option.currency);
//!     }
//! }
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
