use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dinnerizer_recipe::RecipeError;
use dinnerizer_shopping::ShoppingListError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Recipe error: {0}")]
    RecipeError(#[from] RecipeError),

    #[error("Shopping list error: {0}")]
    ShoppingListError(#[from] ShoppingListError),

    #[error("Upstream error: {0}")]
    UpstreamError(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RecipeError(RecipeError::NotFound(_))
            | AppError::RecipeError(RecipeError::UnknownRestriction(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::RecipeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ShoppingListError(ShoppingListError::LookupUnavailable(_)) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::ShoppingListError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to show to the user
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.to_owned(),
            AppError::RecipeError(err @ (RecipeError::NotFound(_) | RecipeError::UnknownRestriction(_))) => {
                err.to_string()
            }
            AppError::ShoppingListError(ShoppingListError::LookupUnavailable(_)) => {
                "Failed to fetch products.".to_string()
            }
            AppError::ShoppingListError(err) => err.to_string(),
            AppError::UpstreamError(_) => "Failed to fetch stores.".to_string(),
            AppError::RecipeError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, status = status_code.as_u16(), "request failed");
        } else {
            tracing::warn!(error = %self, status = status_code.as_u16(), "request rejected");
        }

        (status_code, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
