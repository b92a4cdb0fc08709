use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use dinnerizer_kroger::KrogerClient;
use dinnerizer_recipe::Catalog;
use dinnerizer_shopping::{ProductLookup, StoreLocator};
use tower_http::trace::TraceLayer;

use crate::config::Config;

mod health;
mod recipes;
pub mod shopping_list;
mod stores;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub products: Arc<dyn ProductLookup>,
    pub stores: Arc<dyn StoreLocator>,
}

impl AppState {
    /// Load the recipe catalog and connect to the store backend
    pub fn from_config(config: Config) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog.path)?;
        let client = Arc::new(KrogerClient::new(
            config.api.base_url.to_owned(),
            config.api.timeout(),
        )?);

        tracing::info!(base_url = client.base_url(), "store backend configured");

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            products: client.clone(),
            stores: client,
        })
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/recipes", get(recipes::list))
        .route("/stores", get(stores::list))
        .route("/shopping-list", post(shopping_list::action))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
