//! # Persistence Layer
//!
//! Ports and implementations for the engine's collaborators.
//!
//! ## Ports
//!
//! - [`SandboxStore`]: the only *mutable* collaborator — creates and deletes
//!   sandbox addresses and line sets
//! - [`CartStore`]: read-only access to the caller's cart
//! - [`ProductCatalog`]: read-only access to product records
//!
//! ## Implementations
//!
//! - [`in_memory`]: thread-safe in-memory implementations, used by tests and
//!   by deployments where sandbox state need never touch a database

pub mod in_memory;
pub mod traits;

pub use traits::{CartStore, ProductCatalog, RepositoryError, RepositoryResult, SandboxStore};
