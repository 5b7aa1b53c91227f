//! Storefront shipping quote server.
//!
//! Wires the engine with in-memory collaborators and a demo carrier set,
//! then serves the REST API. Real deployments swap the stores and registry
//! for their own implementations of the ports.

use anyhow::Context;
use ship_quote::api::rest::{AppState, create_router};
use ship_quote::application::use_cases::compute_quote::ShippingQuoteService;
use ship_quote::domain::value_objects::{CarrierId, Price};
use ship_quote::infrastructure::carriers::flat_rate::FlatRateCarrier;
use ship_quote::infrastructure::carriers::registry::StaticCarrierRegistry;
use ship_quote::infrastructure::carriers::tiered::{RateTier, TieredRateCarrier};
use ship_quote::infrastructure::persistence::in_memory::{
    InMemoryCartStore, InMemoryProductCatalog, InMemorySandboxStore,
};
use ship_quote::infrastructure::settings::StorefrontSettings;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn demo_registry() -> anyhow::Result<StaticCarrierRegistry> {
    let standard = FlatRateCarrier::new(
        CarrierId::new("standard"),
        "Standard",
        Price::new(Decimal::from(150)).context("standard price")?,
    )
    .free_over(Price::new(Decimal::from(10_000)).context("free-over threshold")?)
    .delivery_window("5-7 business days");

    let express = TieredRateCarrier::new(
        CarrierId::new("express"),
        "Express",
        vec![
            RateTier {
                max_units: 3,
                price: Price::new(Decimal::from(250)).context("tier price")?,
            },
            RateTier {
                max_units: 10,
                price: Price::new(Decimal::from(400)).context("tier price")?,
            },
        ],
    )
    .delivery_window("1-2 business days");

    Ok(StaticCarrierRegistry::new()
        .register(Arc::new(standard))
        .register(Arc::new(express)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = StorefrontSettings::load().context("loading storefront settings")?;
    info!(country = %settings.country(), currency = %settings.currency(), "settings loaded");

    let sandbox_store = Arc::new(InMemorySandboxStore::new());
    let cart_store = Arc::new(InMemoryCartStore::new());
    let catalog = Arc::new(InMemoryProductCatalog::new());
    let registry = Arc::new(demo_registry()?);

    let service = ShippingQuoteService::new(
        registry,
        sandbox_store,
        cart_store,
        Arc::clone(&catalog) as Arc<dyn ship_quote::infrastructure::persistence::ProductCatalog>,
        &settings,
    );

    let state = Arc::new(AppState::new(
        service,
        catalog as Arc<dyn ship_quote::infrastructure::persistence::ProductCatalog>,
    ));
    let router = create_router(state);

    let addr = std::env::var("SHIP_QUOTE_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "shipping quote server listening");

    axum::serve(listener, router).await.context("serving")?;
    Ok(())
}
