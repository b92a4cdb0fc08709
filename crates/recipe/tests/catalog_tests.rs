use dinnerizer_recipe::{Catalog, DietaryRestriction, RecipeError, RecipeFilter};
use temp_dir::TempDir;

const RECIPES: &str = r#"[
    {
        "name": "Pancakes",
        "description": "Sunday morning classic",
        "imageUrl": "img/pancakes.jpg",
        "time": "20 min",
        "ingredients": [
            {"name": "flour", "unit": "cups", "amount": 2},
            {"name": "milk", "unit": "cups", "amount": "1.5"},
            {"name": "eggs", "unit": "", "amount": 2}
        ],
        "dietaryRestrictions": ["vegetarian"]
    },
    {
        "name": "Chicken Tacos",
        "description": "Weeknight dinner",
        "imageUrl": "img/tacos.jpg",
        "time": "30 min",
        "ingredients": [
            {"name": "chicken breast", "unit": "lb", "amount": 1},
            {"name": "tortillas", "unit": "", "amount": 8}
        ],
        "dietaryRestrictions": ["dairyFree"]
    },
    {
        "name": "Quinoa Salad",
        "description": "Light lunch",
        "imageUrl": "img/quinoa.jpg",
        "time": "15 min",
        "ingredients": [
            {"name": "quinoa", "unit": "cups", "amount": 1},
            {"name": "cucumber", "unit": "", "amount": 1}
        ],
        "dietaryRestrictions": ["vegetarian", "glutenFree", "dairyFree"]
    }
]"#;

#[test]
fn test_load_catalog_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("recipes.json");
    std::fs::write(&path, RECIPES)?;

    let catalog = Catalog::load(&path)?;

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(1)?.name, "Chicken Tacos");
    assert_eq!(catalog.get(0)?.ingredients[1].amount.as_ref().unwrap().value(), Some(1.5));

    Ok(())
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();

    let result = Catalog::load(dir.child("missing.json"));

    assert!(matches!(result, Err(RecipeError::Io { .. })));
}

#[test]
fn test_search_returns_catalog_positions() {
    let catalog = Catalog::from_json(RECIPES).unwrap();

    let vegetarian = RecipeFilter::new("", vec![DietaryRestriction::Vegetarian]);
    let found: Vec<(usize, &str)> = catalog
        .search(&vegetarian)
        .map(|(index, recipe)| (index, recipe.name.as_str()))
        .collect();

    assert_eq!(found, vec![(0, "Pancakes"), (2, "Quinoa Salad")]);
}

#[test]
fn test_search_by_ingredient_with_restrictions() {
    let catalog = Catalog::from_json(RECIPES).unwrap();

    let filter = RecipeFilter::parse("CUCUMBER", "glutenFree,dairyFree").unwrap();
    let found: Vec<usize> = catalog.search(&filter).map(|(index, _)| index).collect();
    assert_eq!(found, vec![2]);

    let filter = RecipeFilter::parse("tortillas", "vegetarian").unwrap();
    assert_eq!(catalog.search(&filter).count(), 0);
}
