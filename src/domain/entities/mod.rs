//! # Domain Entities
//!
//! - [`quote_request`]: the validated inbound request
//! - [`sandbox`]: ephemeral address / line set records and the per-request
//!   context that tracks them for reclamation
//! - [`carrier_quote`]: successful quotes and recorded carrier failures
//! - [`cart`]: read-only projection of the caller's cart
//! - [`product`]: read-only projection of a catalog product

pub mod carrier_quote;
pub mod cart;
pub mod product;
pub mod quote_request;
pub mod sandbox;
