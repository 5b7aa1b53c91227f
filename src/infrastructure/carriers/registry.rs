//! # Carrier Registry
//!
//! Lookup of carriers eligible for public quoting.
//!
//! Registry contents are read-only configuration from the engine's point of
//! view: requests share the registry but never mutate it.

use crate::domain::value_objects::CarrierId;
use crate::infrastructure::carriers::traits::CarrierAdapter;
use async_trait::async_trait;
use std::sync::Arc;

/// Port for listing the carriers a storefront may quote publicly.
#[async_trait]
pub trait CarrierRegistry: Send + Sync + std::fmt::Debug {
    /// Returns every published carrier, in registration order.
    async fn publicly_quotable(&self) -> Vec<Arc<dyn CarrierAdapter>>;

    /// Returns one carrier by id, published or not.
    async fn get(&self, id: &CarrierId) -> Option<Arc<dyn CarrierAdapter>>;
}

/// A fixed, in-process carrier registry.
///
/// Suitable for storefronts whose carrier set is wired at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticCarrierRegistry {
    carriers: Vec<Arc<dyn CarrierAdapter>>,
}

impl StaticCarrierRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from a carrier list.
    #[must_use]
    pub fn with_carriers(carriers: Vec<Arc<dyn CarrierAdapter>>) -> Self {
        Self { carriers }
    }

    /// Adds a carrier.
    #[must_use]
    pub fn register(mut self, carrier: Arc<dyn CarrierAdapter>) -> Self {
        self.carriers.push(carrier);
        self
    }

    /// Returns the number of registered carriers, published or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    /// Returns true when no carriers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

#[async_trait]
impl CarrierRegistry for StaticCarrierRegistry {
    async fn publicly_quotable(&self) -> Vec<Arc<dyn CarrierAdapter>> {
        self.carriers
            .iter()
            .filter(|c| c.is_published())
            .cloned()
            .collect()
    }

    async fn get(&self, id: &CarrierId) -> Option<Arc<dyn CarrierAdapter>> {
        self.carriers.iter().find(|c| c.carrier_id() == id).cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::carriers::flat_rate::FlatRateCarrier;
    use crate::domain::value_objects::Price;
    use rust_decimal_macros::dec;

    fn carrier(name: &str, published: bool) -> Arc<dyn CarrierAdapter> {
        let c = FlatRateCarrier::new(
            CarrierId::new(name.to_lowercase()),
            name,
            Price::new(dec!(100)).unwrap(),
        )
        .published(published);
        Arc::new(c)
    }

    #[tokio::test]
    async fn unpublished_carriers_are_hidden() {
        let registry = StaticCarrierRegistry::new()
            .register(carrier("Standard", true))
            .register(carrier("Internal", false));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.publicly_quotable().await.len(), 1);
        // but direct lookup still finds it
        assert!(registry.get(&CarrierId::new("internal")).await.is_some());
    }
}
