//! # Sandbox Context Builder
//!
//! Builds the ephemeral address and priced line set a carrier rates against.
//!
//! Entities are attached to the request-owned [`SandboxContext`] the moment
//! they are persisted, *before* the next build step runs. A failure halfway
//! through therefore leaves the context accurately describing what exists,
//! and the reclaimer removes exactly that.
//!
//! The line set is a field-by-field copy of the caller's non-shipping cart
//! lines, or a single synthesized line when there is no usable cart. It
//! never aliases the real cart.

use crate::application::error::{QuoteError, QuoteResultType};
use crate::domain::entities::quote_request::QuoteRequest;
use crate::domain::entities::sandbox::{
    SandboxAddress, SandboxContext, SandboxLine, SandboxLineSet,
};
use crate::domain::value_objects::{AddressId, CountryCode, PostalCode};
use crate::infrastructure::persistence::traits::{CartStore, ProductCatalog, SandboxStore};
use std::sync::Arc;
use tracing::debug;

/// Builds sandbox entities for one request.
#[derive(Debug, Clone)]
pub struct SandboxContextBuilder {
    sandbox_store: Arc<dyn SandboxStore>,
    cart_store: Arc<dyn CartStore>,
    catalog: Arc<dyn ProductCatalog>,
    country: CountryCode,
}

impl SandboxContextBuilder {
    /// Creates a builder.
    ///
    /// `country` is the storefront's configured destination country (already
    /// resolved against the process-wide default).
    #[must_use]
    pub fn new(
        sandbox_store: Arc<dyn SandboxStore>,
        cart_store: Arc<dyn CartStore>,
        catalog: Arc<dyn ProductCatalog>,
        country: CountryCode,
    ) -> Self {
        Self {
            sandbox_store,
            cart_store,
            catalog,
            country,
        }
    }

    /// Builds the full sandbox context for a request: address first, then
    /// line set.
    ///
    /// Partial progress is recorded in `ctx` before any fallible step, so
    /// the caller can reclaim whatever exists on failure.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ContextBuild`] when neither a usable cart nor a
    /// known product is available, or [`QuoteError::Repository`] when a
    /// store fails.
    pub async fn build(
        &self,
        ctx: &mut SandboxContext,
        request: &QuoteRequest,
    ) -> QuoteResultType<()> {
        let address = self
            .create_sandbox_address(request.postal_code().clone())
            .await?;
        let address_id = address.id();
        ctx.attach_address(address);

        let line_set = self.create_sandbox_line_set(address_id, request).await?;
        ctx.attach_line_set(line_set);

        debug!(
            request_id = %ctx.request_id(),
            lines = ctx.line_set().map(SandboxLineSet::len).unwrap_or(0),
            "sandbox context built"
        );
        Ok(())
    }

    /// Creates and persists the sandbox address.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Repository`] when the sandbox store rejects the
    /// insert.
    pub async fn create_sandbox_address(
        &self,
        postal_code: PostalCode,
    ) -> QuoteResultType<SandboxAddress> {
        let address = SandboxAddress::new(postal_code, self.country.clone());
        self.sandbox_store.insert_address(&address).await?;
        Ok(address)
    }

    /// Creates and persists the sandbox line set.
    ///
    /// Copies the non-shipping lines of the request's cart when it exists
    /// and is non-empty; otherwise synthesizes one line from the request's
    /// product and quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ContextBuild`] when no line source is
    /// available, or [`QuoteError::Repository`] on store failure.
    pub async fn create_sandbox_line_set(
        &self,
        ships_to: AddressId,
        request: &QuoteRequest,
    ) -> QuoteResultType<SandboxLineSet> {
        let lines = self.resolve_lines(request).await?;
        let line_set = SandboxLineSet::new(ships_to, lines);
        self.sandbox_store.insert_line_set(&line_set).await?;
        Ok(line_set)
    }

    async fn resolve_lines(&self, request: &QuoteRequest) -> QuoteResultType<Vec<SandboxLine>> {
        if let Some(cart_ref) = request.cart_ref() {
            if let Some(cart) = self.cart_store.get_cart(cart_ref).await? {
                let copied: Vec<SandboxLine> = cart
                    .non_shipping_lines()
                    .map(|l| SandboxLine::new(l.product_ref().clone(), l.quantity(), l.unit_price()))
                    .collect();
                if !copied.is_empty() {
                    return Ok(copied);
                }
                debug!(cart = %cart_ref, "cart has no quotable lines, falling back to product");
            } else {
                debug!(cart = %cart_ref, "cart not found, falling back to product");
            }
        }

        let Some(product_ref) = request.product_ref() else {
            return Err(QuoteError::context_build(
                "neither a cart nor a product is available for the line set",
            ));
        };

        let product = self
            .catalog
            .get_product(product_ref)
            .await?
            .ok_or_else(|| {
                QuoteError::context_build(format!("product {product_ref} not found in catalog"))
            })?;

        Ok(vec![SandboxLine::new(
            product.id().clone(),
            request.quantity(),
            product.list_price(),
        )])
    }
}
