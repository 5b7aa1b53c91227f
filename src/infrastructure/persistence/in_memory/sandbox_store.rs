//! # In-Memory Sandbox Store
//!
//! In-memory implementation of [`SandboxStore`].
//!
//! Uses thread-safe `HashMap`s keyed by the entities' fresh UUIDs. Since
//! sandbox keys are random per request, concurrent requests can never
//! observe or delete each other's entries.

use crate::domain::entities::sandbox::{SandboxAddress, SandboxLineSet};
use crate::domain::value_objects::{AddressId, LineSetId};
use crate::infrastructure::persistence::traits::{RepositoryResult, SandboxStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`SandboxStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySandboxStore {
    addresses: Arc<RwLock<HashMap<AddressId, SandboxAddress>>>,
    line_sets: Arc<RwLock<HashMap<LineSetId, SandboxLineSet>>>,
}

impl InMemorySandboxStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stored address, for test assertions.
    pub async fn get_address(&self, id: AddressId) -> Option<SandboxAddress> {
        self.addresses.read().await.get(&id).cloned()
    }

    /// Returns a stored line set, for test assertions.
    pub async fn get_line_set(&self, id: LineSetId) -> Option<SandboxLineSet> {
        self.line_sets.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl SandboxStore for InMemorySandboxStore {
    async fn insert_address(&self, address: &SandboxAddress) -> RepositoryResult<()> {
        let mut addresses = self.addresses.write().await;
        addresses.insert(address.id(), address.clone());
        Ok(())
    }

    async fn insert_line_set(&self, line_set: &SandboxLineSet) -> RepositoryResult<()> {
        let mut line_sets = self.line_sets.write().await;
        line_sets.insert(line_set.id(), line_set.clone());
        Ok(())
    }

    async fn delete_address(&self, id: AddressId) -> RepositoryResult<bool> {
        let mut addresses = self.addresses.write().await;
        Ok(addresses.remove(&id).is_some())
    }

    async fn delete_line_set(&self, id: LineSetId) -> RepositoryResult<bool> {
        let mut line_sets = self.line_sets.write().await;
        Ok(line_sets.remove(&id).is_some())
    }

    async fn live_entity_count(&self) -> RepositoryResult<u64> {
        let addresses = self.addresses.read().await;
        let line_sets = self.line_sets.read().await;
        Ok((addresses.len() + line_sets.len()) as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CountryCode, PostalCode};

    fn address() -> SandboxAddress {
        SandboxAddress::new(
            PostalCode::new("1425").unwrap(),
            CountryCode::default_country(),
        )
    }

    #[tokio::test]
    async fn insert_and_delete_address() {
        let store = InMemorySandboxStore::new();
        let addr = address();

        store.insert_address(&addr).await.unwrap();
        assert_eq!(store.live_entity_count().await.unwrap(), 1);

        assert!(store.delete_address(addr.id()).await.unwrap());
        assert_eq!(store.live_entity_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_missing_is_not_an_error() {
        let store = InMemorySandboxStore::new();
        assert!(!store.delete_address(AddressId::new_v4()).await.unwrap());
        assert!(!store.delete_line_set(LineSetId::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn counts_both_entity_kinds() {
        let store = InMemorySandboxStore::new();
        let addr = address();
        let set = SandboxLineSet::new(addr.id(), vec![]);

        store.insert_address(&addr).await.unwrap();
        store.insert_line_set(&set).await.unwrap();
        assert_eq!(store.live_entity_count().await.unwrap(), 2);
    }
}
