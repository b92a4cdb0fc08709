use dinnerizer_shopping::ShoppingListOutcome;

use crate::routes::AppState;
use crate::routes::shopping_list::{ShoppingListInput, build};

pub async fn shopping_list(
    config: crate::config::Config,
    location_id: String,
    recipes: Vec<usize>,
) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;

    let input = ShoppingListInput {
        location_id: Some(location_id),
        recipes,
    };

    match build(&state, input).await? {
        ShoppingListOutcome::Ready(list) => print!("{}", list.to_markdown()),
        ShoppingListOutcome::NoResults => println!("No products found."),
    }

    Ok(())
}
