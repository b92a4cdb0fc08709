pub mod aggregation;
pub mod assignment;
pub mod commands;
pub mod formatter;
pub mod lookup;
pub mod quantity;
pub mod statistics;

// Re-export commonly used types
pub use aggregation::{Ingredient, IngredientAggregationService, MergedIngredient};
pub use assignment::{AisleAssignment, AisleAssignmentService};
pub use commands::{GenerateShoppingListCommand, ShoppingListError, generate_shopping_list};
pub use formatter::{
    AisleGroup, ExportParseError, GroupedShoppingList, ShoppingListFormatter, ShoppingListOutcome,
};
pub use lookup::{ProductLookup, Store, StoreLocator};
pub use quantity::RawAmount;
pub use statistics::{
    AisleLocation, AisleStatistics, OTHER_AISLE, Product, ProductSearchResult, UNKNOWN_AISLE,
};
