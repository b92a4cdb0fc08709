use dinnerizer_recipe::{Catalog, RecipeFilter};

pub fn list_recipes(
    config: crate::config::Config,
    search: Option<String>,
    diet: Vec<String>,
) -> anyhow::Result<()> {
    let catalog = Catalog::load(&config.catalog.path)?;
    let filter = RecipeFilter::parse(search.unwrap_or_default(), &diet.join(","))?;

    let mut found = 0;
    for (index, recipe) in catalog.search(&filter) {
        println!("{index:>3}  {}  ({})", recipe.name, recipe.time);
        found += 1;
    }

    if found == 0 {
        println!("No recipes match.");
    }

    Ok(())
}
