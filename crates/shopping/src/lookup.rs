use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::statistics::ProductSearchResult;

/// Grocery store near the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub name: String,
    pub location_id: String,
}

/// Product search of a single store
///
/// Implementations return the products matching `term`; aisle descriptions
/// are passed through untouched, normalization belongs to the caller.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn search(&self, location_id: &str, term: &str) -> anyhow::Result<ProductSearchResult>;
}

/// Store discovery around a coordinate
#[async_trait]
pub trait StoreLocator: Send + Sync {
    async fn stores(&self, latitude: f64, longitude: f64) -> anyhow::Result<Vec<Store>>;
}
