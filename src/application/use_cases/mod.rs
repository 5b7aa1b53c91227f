//! # Use Cases
//!
//! - [`compute_quote`]: the single public operation of the engine

pub mod compute_quote;

pub use compute_quote::ShippingQuoteService;
