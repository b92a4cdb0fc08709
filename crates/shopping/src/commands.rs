use futures::{StreamExt, stream};
use indexmap::IndexSet;

use crate::aggregation::{Ingredient, IngredientAggregationService};
use crate::assignment::AisleAssignmentService;
use crate::formatter::{ShoppingListFormatter, ShoppingListOutcome};
use crate::lookup::ProductLookup;
use crate::statistics::{AisleStatistics, ProductSearchResult};

/// Command to build an aisle-ordered shopping list for a store
#[derive(Debug, Clone)]
pub struct GenerateShoppingListCommand {
    pub location_id: Option<String>,
    /// One ingredient list per selected recipe
    pub ingredient_lists: Vec<Vec<Ingredient>>,
    /// Product searches allowed in flight at once, 1 searches one name at a time
    pub lookup_concurrency: usize,
}

impl GenerateShoppingListCommand {
    pub fn new(location_id: impl Into<String>, ingredient_lists: Vec<Vec<Ingredient>>) -> Self {
        Self {
            location_id: Some(location_id.into()),
            ingredient_lists,
            lookup_concurrency: 1,
        }
    }
}

/// Error types for shopping list commands
#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("Please select a store first")]
    NoStoreSelected,

    #[error("Please select at least one recipe")]
    NoRecipesSelected,

    #[error("Product search is unavailable: {0}")]
    LookupUnavailable(String),
}

/// Generate a shopping list
///
/// This command:
/// 1. Merges the ingredients of every selected recipe (same name and unit are summed)
/// 2. Searches the store once per distinct ingredient name
/// 3. Builds aisle statistics over all search results
/// 4. Assigns each name a primary aisle and groups the merged ingredients by it
///
/// A failed search only costs its own ingredient an aisle (it lands in
/// `UNKNOWN`). The command fails as a whole only when every search failed.
#[tracing::instrument(
    skip_all,
    fields(location_id = ?cmd.location_id, recipes = cmd.ingredient_lists.len())
)]
pub async fn generate_shopping_list<L>(
    cmd: GenerateShoppingListCommand,
    lookup: &L,
) -> Result<ShoppingListOutcome, ShoppingListError>
where
    L: ProductLookup + ?Sized,
{
    let location_id = cmd
        .location_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(ShoppingListError::NoStoreSelected)?;

    if cmd.ingredient_lists.is_empty() {
        return Err(ShoppingListError::NoRecipesSelected);
    }

    // 1. Merge ingredients (first occurrence order drives output order)
    let merged = IngredientAggregationService::merge(cmd.ingredient_lists.iter().map(Vec::as_slice));

    // 2. One search per distinct name, whatever the unit
    let terms: IndexSet<&str> = merged.values().map(|i| i.name.as_str()).collect();
    let results = search_all(lookup, location_id, &terms, cmd.lookup_concurrency).await;

    let failures = results.iter().filter(|r| r.is_err()).count();
    if !terms.is_empty() && failures == terms.len() {
        let reason = results
            .into_iter()
            .find_map(Result::err)
            .map(|err| err.to_string())
            .unwrap_or_default();
        return Err(ShoppingListError::LookupUnavailable(reason));
    }

    let results: Vec<ProductSearchResult> = results
        .into_iter()
        .zip(terms.iter())
        .map(|(result, term)| result.unwrap_or_else(|_| ProductSearchResult::empty(*term)))
        .collect();

    // 3. Statistics only once every search is back
    let stats = AisleStatistics::build(&results);

    // 4. Assign and group
    let assignments = AisleAssignmentService::assign(&stats);
    let outcome = ShoppingListFormatter::format(merged.values(), &assignments);

    tracing::info!(
        ingredients = merged.len(),
        searches = terms.len(),
        failed_searches = failures,
        "shopping list generated"
    );

    Ok(outcome)
}

/// Search every term, results come back in `terms` order whatever the
/// completion order of the searches
async fn search_all<L>(
    lookup: &L,
    location_id: &str,
    terms: &IndexSet<&str>,
    concurrency: usize,
) -> Vec<anyhow::Result<ProductSearchResult>>
where
    L: ProductLookup + ?Sized,
{
    let searches: Vec<_> = terms
        .iter()
        .map(|&term| search_one(lookup, location_id, term))
        .collect();
    stream::iter(searches)
        .buffered(concurrency.max(1))
        .collect()
        .await
}

async fn search_one<L>(
    lookup: &L,
    location_id: &str,
    term: &str,
) -> anyhow::Result<ProductSearchResult>
where
    L: ProductLookup + ?Sized,
{
    match lookup.search(location_id, term).await {
        Ok(result) => Ok(ProductSearchResult {
            term: term.to_owned(),
            ..result
        }),
        Err(err) => {
            tracing::warn!(term = term, err = %err, "product search failed");
            Err(err)
        }
    }
}
