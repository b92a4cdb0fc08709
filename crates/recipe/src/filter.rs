use std::str::FromStr;

use crate::error::{RecipeError, RecipeResult};
use crate::types::{DietaryRestriction, Recipe};

/// Text and dietary filter over the catalog
///
/// # Business Rules
/// - **Text**: case-insensitive substring of the name, the description or any ingredient name
/// - **AND Logic**: ALL requested dietary restrictions must be tagged on the recipe
/// - An empty filter matches every recipe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    search: String,
    restrictions: Vec<DietaryRestriction>,
}

impl RecipeFilter {
    pub fn new(search: impl AsRef<str>, restrictions: Vec<DietaryRestriction>) -> Self {
        Self {
            search: search.as_ref().trim().to_lowercase(),
            restrictions,
        }
    }

    /// Build from restriction ids such as `vegetarian,glutenFree`
    pub fn parse(search: impl AsRef<str>, restrictions: &str) -> RecipeResult<Self> {
        let restrictions = restrictions
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                DietaryRestriction::from_str(id)
                    .map_err(|_| RecipeError::UnknownRestriction(id.to_owned()))
            })
            .collect::<RecipeResult<Vec<_>>>()?;

        Ok(Self::new(search, restrictions))
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe) && self.satisfies_all_restrictions(recipe)
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        if self.search.is_empty() {
            return true;
        }

        recipe.name.to_lowercase().contains(&self.search)
            || recipe.description.to_lowercase().contains(&self.search)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.name.to_lowercase().contains(&self.search))
    }

    fn satisfies_all_restrictions(&self, recipe: &Recipe) -> bool {
        self.restrictions
            .iter()
            .all(|restriction| recipe.has_restriction(*restriction))
    }
}
