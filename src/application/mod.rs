//! # Application Layer
//!
//! The quote pipeline services and the use case that drives them.
//!
//! One request flows through five services, in order:
//! validator → context builder → rate aggregator → sandbox reclaimer →
//! result formatter. The reclaimer runs on *every* path out of the pipeline,
//! which is enforced by
//! [`use_cases::compute_quote::ShippingQuoteService`].

pub mod error;
pub mod services;
pub mod use_cases;
