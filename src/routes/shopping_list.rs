use axum::{Json, extract::State};
use dinnerizer_shopping::{
    GenerateShoppingListCommand, GroupedShoppingList, ShoppingListOutcome, generate_shopping_list,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListInput {
    #[serde(default)]
    pub location_id: Option<String>,
    /// Catalog indices of the selected recipes
    #[serde(default)]
    pub recipes: Vec<usize>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShoppingListResponse {
    Ok {
        groups: GroupedShoppingList,
        markdown: String,
    },
    NoResults,
}

impl From<ShoppingListOutcome> for ShoppingListResponse {
    fn from(outcome: ShoppingListOutcome) -> Self {
        match outcome {
            ShoppingListOutcome::Ready(groups) => {
                let markdown = groups.to_markdown();
                ShoppingListResponse::Ok { groups, markdown }
            }
            ShoppingListOutcome::NoResults => ShoppingListResponse::NoResults,
        }
    }
}

/// Build the shopping list for the selected recipes at one store
pub async fn build(
    app: &AppState,
    input: ShoppingListInput,
) -> Result<ShoppingListOutcome, AppError> {
    let recipes = app.catalog.select(&input.recipes)?;

    let cmd = GenerateShoppingListCommand {
        location_id: input.location_id,
        ingredient_lists: recipes
            .iter()
            .map(|recipe| recipe.ingredients.clone())
            .collect(),
        lookup_concurrency: app.config.shopping.lookup_concurrency,
    };

    Ok(generate_shopping_list(cmd, app.products.as_ref()).await?)
}

/// POST /shopping-list
pub async fn action(
    State(app): State<AppState>,
    Json(input): Json<ShoppingListInput>,
) -> Result<Json<ShoppingListResponse>, AppError> {
    let outcome = build(&app, input).await?;

    Ok(Json(outcome.into()))
}
