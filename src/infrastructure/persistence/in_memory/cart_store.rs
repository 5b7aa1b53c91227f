//! # In-Memory Cart Store
//!
//! In-memory implementation of [`CartStore`].

use crate::domain::entities::cart::Cart;
use crate::domain::value_objects::CartId;
use crate::infrastructure::persistence::traits::{CartStore, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`CartStore`].
///
/// Returns cloned carts: callers can never hold a reference into the store,
/// mirroring the isolation a real backend provides.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCartStore {
    storage: Arc<RwLock<HashMap<CartId, Cart>>>,
}

impl InMemoryCartStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a cart.
    pub async fn put_cart(&self, cart: Cart) {
        let mut storage = self.storage.write().await;
        storage.insert(cart.id().clone(), cart);
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get_cart(&self, id: &CartId) -> RepositoryResult<Option<Cart>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }
}
