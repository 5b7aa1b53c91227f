//! # In-Memory Persistence
//!
//! Thread-safe in-memory implementations of the persistence ports.
//!
//! Suitable for tests and for deployments where sandbox scratch state should
//! never touch durable storage in the first place.

pub mod cart_store;
pub mod product_catalog;
pub mod sandbox_store;

pub use cart_store::InMemoryCartStore;
pub use product_catalog::InMemoryProductCatalog;
pub use sandbox_store::InMemorySandboxStore;
