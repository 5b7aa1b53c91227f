//! # Product Projection
//!
//! Read-only view of a catalog product, as served by the product catalog.
//!
//! `list_price` seeds synthesized sandbox lines when the caller has no cart;
//! `sku` and `color_name` feed the variant-info lookup exposed by the REST
//! adapter, which is independent of the quote engine itself.

use crate::domain::value_objects::{Price, ProductId};
use serde::{Deserialize, Serialize};

/// A product variant as the storefront catalog describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    list_price: Price,
    sku: Option<String>,
    color_name: Option<String>,
}

impl ProductRecord {
    /// Creates a product record.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, list_price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            list_price,
            sku: None,
            color_name: None,
        }
    }

    /// Sets the SKU (internal reference).
    #[must_use]
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Sets the color attribute value of this variant.
    #[must_use]
    pub fn with_color(mut self, color_name: impl Into<String>) -> Self {
        self.color_name = Some(color_name.into());
        self
    }

    /// Returns the product identifier.
    #[must_use]
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the list price used for synthesized sandbox lines.
    #[must_use]
    pub fn list_price(&self) -> Price {
        self.list_price
    }

    /// Returns the SKU, if set.
    #[must_use]
    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    /// Returns the color attribute value, if this variant has one.
    #[must_use]
    pub fn color_name(&self) -> Option<&str> {
        self.color_name.as_deref()
    }
}
