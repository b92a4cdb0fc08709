pub mod catalog;
pub mod error;
pub mod filter;
pub mod types;

pub use catalog::Catalog;
pub use error::{RecipeError, RecipeResult};
pub use filter::RecipeFilter;
pub use types::{DietaryRestriction, Recipe};
