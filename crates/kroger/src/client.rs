//! Client for the store/product backend
//!
//! The backend proxies the grocery chain's location and product APIs:
//! - `GET /stores?lat=..&lng=..` → `{"data": [{"name", "locationId"}]}`
//! - `GET /products?locationId=..&term=..` → `{"data": [{"aisleLocations": [{"description"}]}]}`
//!
//! Aisle descriptions are returned exactly as the store reports them.

use std::time::Duration;

use async_trait::async_trait;
use dinnerizer_shopping::{Product, ProductLookup, ProductSearchResult, Store, StoreLocator};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

const USER_AGENT: &str = concat!("dinnerizer/", env!("CARGO_PKG_VERSION"));

/// Backend client errors
#[derive(Debug, Error)]
pub enum KrogerError {
    /// Network communication error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Backend returned error response
    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    /// Failed to parse response JSON
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Every backend response wraps its payload in `data`, absent when nothing matched
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<Vec<T>>,
}

pub struct KrogerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl KrogerClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, KrogerError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| KrogerError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stores near a coordinate, nearest first as ranked by the backend
    pub async fn find_stores(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Store>, KrogerError> {
        let envelope: Envelope<Store> = self
            .get_json(
                "stores",
                &[("lat", latitude.to_string()), ("lng", longitude.to_string())],
            )
            .await?;

        let stores = envelope.data.unwrap_or_default();
        tracing::info!(latitude, longitude, stores = stores.len(), "store lookup successful");

        Ok(stores)
    }

    /// Products of a store matching `term`
    pub async fn search_products(
        &self,
        location_id: &str,
        term: &str,
    ) -> Result<ProductSearchResult, KrogerError> {
        let envelope: Envelope<Product> = self
            .get_json(
                "products",
                &[("locationId", location_id.to_owned()), ("term", term.to_owned())],
            )
            .await?;

        let products = envelope.data.unwrap_or_default();
        tracing::debug!(location_id, term, products = products.len(), "product search successful");

        Ok(ProductSearchResult::new(term, products))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, KrogerError> {
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!(url = %url, ?query, "querying backend");

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| KrogerError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(KrogerError::ApiError(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| KrogerError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ProductLookup for KrogerClient {
    async fn search(&self, location_id: &str, term: &str) -> anyhow::Result<ProductSearchResult> {
        Ok(self.search_products(location_id, term).await?)
    }
}

#[async_trait]
impl StoreLocator for KrogerClient {
    async fn stores(&self, latitude: f64, longitude: f64) -> anyhow::Result<Vec<Store>> {
        Ok(self.find_stores(latitude, longitude).await?)
    }
}
