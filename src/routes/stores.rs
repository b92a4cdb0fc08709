use axum::{
    Json,
    extract::{Query, State},
};
use dinnerizer_shopping::Store;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct StoreList {
    pub stores: Vec<Store>,
}

/// GET /stores?lat=..&lng=..
pub async fn list(
    State(app): State<AppState>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<StoreList>, AppError> {
    let (Some(latitude), Some(longitude)) = (query.lat, query.lng) else {
        return Err(AppError::ValidationError(
            "Unable to get your location.".to_string(),
        ));
    };

    let stores = app
        .stores
        .stores(latitude, longitude)
        .await
        .map_err(|e| AppError::UpstreamError(format!("{e:#}")))?;

    Ok(Json(StoreList { stores }))
}
