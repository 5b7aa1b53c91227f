//! # Sandbox Reclaimer
//!
//! Guaranteed deletion of every sandbox entity a request created.
//!
//! Runs on every exit path and is idempotent: the context hands over its
//! entities exactly once, and the store treats delete-of-missing as success.
//! The line set is deleted before the address it ships to, so no stored
//! record ever dangles toward a deleted address.
//!
//! Reclamation failures are logged for operators but never override the
//! business result: a quote the buyer can use beats a perfectly clean
//! error path.

use crate::domain::entities::sandbox::SandboxContext;
use crate::infrastructure::persistence::traits::SandboxStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Deletes a request's sandbox entities.
#[derive(Debug, Clone)]
pub struct SandboxReclaimer {
    sandbox_store: Arc<dyn SandboxStore>,
}

impl SandboxReclaimer {
    /// Creates a reclaimer.
    #[must_use]
    pub fn new(sandbox_store: Arc<dyn SandboxStore>) -> Self {
        Self { sandbox_store }
    }

    /// Reclaims whatever the context tracks: line set first, then address.
    ///
    /// A second call on the same context is a no-op.
    pub async fn reclaim(&self, ctx: &mut SandboxContext) {
        let (line_set, address) = ctx.take_for_reclaim();

        if let Some(line_set) = line_set {
            match self.sandbox_store.delete_line_set(line_set.id()).await {
                Ok(existed) => {
                    debug!(request_id = %ctx.request_id(), existed, "sandbox line set reclaimed");
                }
                Err(e) => {
                    warn!(request_id = %ctx.request_id(), error = %e, "failed to reclaim sandbox line set");
                }
            }
        }

        if let Some(address) = address {
            match self.sandbox_store.delete_address(address.id()).await {
                Ok(existed) => {
                    debug!(request_id = %ctx.request_id(), existed, "sandbox address reclaimed");
                }
                Err(e) => {
                    warn!(request_id = %ctx.request_id(), error = %e, "failed to reclaim sandbox address");
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::sandbox::{SandboxAddress, SandboxLineSet};
    use crate::domain::value_objects::{CountryCode, PostalCode, RequestId};
    use crate::infrastructure::persistence::in_memory::InMemorySandboxStore;
    use crate::infrastructure::persistence::traits::SandboxStore as _;

    async fn populated_context(store: &InMemorySandboxStore) -> SandboxContext {
        let address = SandboxAddress::new(
            PostalCode::new("1425").unwrap(),
            CountryCode::default_country(),
        );
        let line_set = SandboxLineSet::new(address.id(), vec![]);
        store.insert_address(&address).await.unwrap();
        store.insert_line_set(&line_set).await.unwrap();

        let mut ctx = SandboxContext::new(RequestId::new_v4());
        ctx.attach_address(address);
        ctx.attach_line_set(line_set);
        ctx
    }

    #[tokio::test]
    async fn removes_both_entities() {
        let store = InMemorySandboxStore::new();
        let mut ctx = populated_context(&store).await;
        assert_eq!(store.live_entity_count().await.unwrap(), 2);

        let reclaimer = SandboxReclaimer::new(Arc::new(store.clone()));
        reclaimer.reclaim(&mut ctx).await;

        assert_eq!(store.live_entity_count().await.unwrap(), 0);
        assert!(ctx.is_reclaimed());
    }

    #[tokio::test]
    async fn double_reclaim_is_a_noop() {
        let store = InMemorySandboxStore::new();
        let mut ctx = populated_context(&store).await;

        let reclaimer = SandboxReclaimer::new(Arc::new(store.clone()));
        reclaimer.reclaim(&mut ctx).await;
        reclaimer.reclaim(&mut ctx).await;

        assert_eq!(store.live_entity_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn partial_context_reclaims_what_exists() {
        let store = InMemorySandboxStore::new();
        let address = SandboxAddress::new(
            PostalCode::new("1425").unwrap(),
            CountryCode::default_country(),
        );
        store.insert_address(&address).await.unwrap();

        let mut ctx = SandboxContext::new(RequestId::new_v4());
        ctx.attach_address(address);

        let reclaimer = SandboxReclaimer::new(Arc::new(store.clone()));
        reclaimer.reclaim(&mut ctx).await;

        assert_eq!(store.live_entity_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_context_is_fine() {
        let store = InMemorySandboxStore::new();
        let mut ctx = SandboxContext::new(RequestId::new_v4());

        let reclaimer = SandboxReclaimer::new(Arc::new(store));
        reclaimer.reclaim(&mut ctx).await;
        assert!(ctx.is_reclaimed());
    }
}
