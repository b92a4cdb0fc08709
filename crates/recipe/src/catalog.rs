use std::collections::HashSet;
use std::path::Path;

use crate::error::{RecipeError, RecipeResult};
use crate::filter::RecipeFilter;
use crate::types::Recipe;

/// Static recipe collection, addressed by position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn from_json(json: &str) -> RecipeResult<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: impl AsRef<Path>) -> RecipeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RecipeError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), recipes = catalog.len(), "recipe catalog loaded");

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, index: usize) -> RecipeResult<&Recipe> {
        self.recipes.get(index).ok_or(RecipeError::NotFound(index))
    }

    /// Recipes at `indices`, in selection order, each at most once
    pub fn select(&self, indices: &[usize]) -> RecipeResult<Vec<&Recipe>> {
        let mut seen = HashSet::new();
        indices
            .iter()
            .filter(|index| seen.insert(**index))
            .map(|index| self.get(*index))
            .collect()
    }

    /// Recipes matching `filter`, with their catalog position
    pub fn search<'a>(
        &'a self,
        filter: &'a RecipeFilter,
    ) -> impl Iterator<Item = (usize, &'a Recipe)> + 'a {
        self.recipes
            .iter()
            .enumerate()
            .filter(move |(_, recipe)| filter.matches(recipe))
    }
}
