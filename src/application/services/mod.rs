//! # Pipeline Services
//!
//! - [`validator`]: input-shape checks, no side effects
//! - [`context_builder`]: sandbox address + line set construction
//! - [`rate_aggregation`]: per-carrier rate collection with failure isolation
//! - [`reclaimer`]: guaranteed, idempotent sandbox deletion
//! - [`formatter`]: sorting and response composition

pub mod context_builder;
pub mod formatter;
pub mod rate_aggregation;
pub mod reclaimer;
pub mod validator;

pub use context_builder::SandboxContextBuilder;
pub use formatter::{QuoteOption, QuoteResult, ResultFormatter};
pub use rate_aggregation::{AggregationOutcome, CarrierRateAggregator};
pub use reclaimer::SandboxReclaimer;
pub use validator::{QuoteRequestValidator, RawQuoteRequest};
