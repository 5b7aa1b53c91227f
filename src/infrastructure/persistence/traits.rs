//! # Persistence Ports
//!
//! Trait definitions abstracting the engine's storage collaborators.
//!
//! The delete operations return `Ok(false)` when the entity was already
//! absent. Reclamation relies on that: deleting an already-deleted sandbox
//! entity is a no-op, never an error.

use crate::domain::entities::cart::Cart;
use crate::domain::entities::product::ProductRecord;
use crate::domain::entities::sandbox::{SandboxAddress, SandboxLineSet};
use crate::domain::value_objects::{AddressId, CartId, LineSetId, ProductId};
use async_trait::async_trait;
use thiserror::Error;

/// Error type for persistence port operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Backend connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Backend query error.
    #[error("query error: {0}")]
    Query(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

/// Result type for persistence port operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Store for sandbox entities.
///
/// The only collaborator the engine writes to. Every record inserted here is
/// ephemeral: the reclaimer deletes it before the request completes, so an
/// implementation backed by real storage must support cheap deletes and must
/// treat delete-of-missing as success.
#[async_trait]
pub trait SandboxStore: Send + Sync + std::fmt::Debug {
    /// Inserts a sandbox address.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the backend rejects the write.
    async fn insert_address(&self, address: &SandboxAddress) -> RepositoryResult<()>;

    /// Inserts a sandbox line set.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the backend rejects the write.
    async fn insert_line_set(&self, line_set: &SandboxLineSet) -> RepositoryResult<()>;

    /// Deletes a sandbox address. Returns false if it was already absent.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] only on backend failure, never for a
    /// missing entity.
    async fn delete_address(&self, id: AddressId) -> RepositoryResult<bool>;

    /// Deletes a sandbox line set and its lines. Returns false if already
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] only on backend failure, never for a
    /// missing entity.
    async fn delete_line_set(&self, id: LineSetId) -> RepositoryResult<bool>;

    /// Counts all live sandbox entities (addresses plus line sets).
    ///
    /// Used by tests and operator tooling to verify nothing leaked.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the backend cannot be read.
    async fn live_entity_count(&self) -> RepositoryResult<u64>;
}

/// Read-only access to the caller's cart.
#[async_trait]
pub trait CartStore: Send + Sync + std::fmt::Debug {
    /// Fetches a cart by reference.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the backend cannot be read; a
    /// missing cart is `Ok(None)`.
    async fn get_cart(&self, id: &CartId) -> RepositoryResult<Option<Cart>>;
}

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync + std::fmt::Debug {
    /// Fetches a product record by reference.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] when the backend cannot be read; a
    /// missing product is `Ok(None)`.
    async fn get_product(&self, id: &ProductId) -> RepositoryResult<Option<ProductRecord>>;
}
