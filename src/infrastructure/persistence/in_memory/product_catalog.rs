//! # In-Memory Product Catalog
//!
//! In-memory implementation of [`ProductCatalog`].

use crate::domain::entities::product::ProductRecord;
use crate::domain::value_objects::ProductId;
use crate::infrastructure::persistence::traits::{ProductCatalog, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`ProductCatalog`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    storage: Arc<RwLock<HashMap<ProductId, ProductRecord>>>,
}

impl InMemoryProductCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a product record.
    pub async fn put_product(&self, product: ProductRecord) {
        let mut storage = self.storage.write().await;
        storage.insert(product.id().clone(), product);
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn get_product(&self, id: &ProductId) -> RepositoryResult<Option<ProductRecord>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }
}
