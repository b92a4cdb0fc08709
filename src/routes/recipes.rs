use axum::{
    Json,
    extract::{Query, State},
};
use dinnerizer_recipe::{Recipe, RecipeFilter};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecipeQuery {
    #[serde(default)]
    pub search: String,
    /// Comma separated restriction ids, e.g. `vegetarian,glutenFree`
    #[serde(default)]
    pub diet: String,
}

#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub index: usize,
    #[serde(flatten)]
    pub recipe: Recipe,
}

#[derive(Debug, Serialize)]
pub struct RecipeList {
    pub recipes: Vec<RecipeSummary>,
}

/// GET /recipes?search=..&diet=..
pub async fn list(
    State(app): State<AppState>,
    Query(query): Query<RecipeQuery>,
) -> Result<Json<RecipeList>, AppError> {
    let filter = RecipeFilter::parse(&query.search, &query.diet)?;

    let recipes = app
        .catalog
        .search(&filter)
        .map(|(index, recipe)| RecipeSummary {
            index,
            recipe: recipe.clone(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(search = %query.search, diet = %query.diet, found = recipes.len(), "recipes filtered");

    Ok(Json(RecipeList { recipes }))
}
