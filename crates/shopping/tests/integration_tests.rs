use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use dinnerizer_shopping::{
    GenerateShoppingListCommand, GroupedShoppingList, Ingredient, Product, ProductLookup,
    ProductSearchResult, ShoppingListError, ShoppingListOutcome, UNKNOWN_AISLE,
    generate_shopping_list,
};

/// In-memory store: term -> aisles of each matching product
#[derive(Default)]
struct FakeStore {
    products: HashMap<String, Vec<Vec<&'static str>>>,
    failing: Vec<String>,
    delays: HashMap<String, u64>,
    searched: Mutex<Vec<String>>,
}

impl FakeStore {
    fn with(mut self, term: &str, products: Vec<Vec<&'static str>>) -> Self {
        self.products.insert(term.to_string(), products);
        self
    }

    fn failing(mut self, term: &str) -> Self {
        self.failing.push(term.to_string());
        self
    }

    fn delayed(mut self, term: &str, millis: u64) -> Self {
        self.delays.insert(term.to_string(), millis);
        self
    }

    fn searched(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductLookup for FakeStore {
    async fn search(&self, location_id: &str, term: &str) -> anyhow::Result<ProductSearchResult> {
        assert_eq!(location_id, "store-1");
        self.searched.lock().unwrap().push(term.to_string());

        if let Some(millis) = self.delays.get(term) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }

        if self.failing.iter().any(|t| t == term) {
            anyhow::bail!("connection reset while searching {term}");
        }

        let products = self
            .products
            .get(term)
            .map(|products| {
                products
                    .iter()
                    .map(|aisles| Product::in_aisles(aisles.iter().copied()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(ProductSearchResult::new(term, products))
    }
}

fn baking_store() -> FakeStore {
    FakeStore::default()
        .with("flour", vec![vec!["Baking"], vec!["Baking"]])
        .with("sugar", vec![vec!["Baking"], vec!["Snacks"]])
}

fn cake_recipes() -> Vec<Vec<Ingredient>> {
    vec![
        vec![
            Ingredient::new("flour", "cups", 2.0),
            Ingredient::new("sugar", "cups", 1.0),
        ],
        vec![Ingredient::new("flour", "cups", 1.0)],
    ]
}

async fn generate(store: &FakeStore, lists: Vec<Vec<Ingredient>>) -> GroupedShoppingList {
    generate_shopping_list(GenerateShoppingListCommand::new("store-1", lists), store)
        .await
        .unwrap()
        .into_list()
        .expect("Shopping list should not be empty")
}

#[tokio::test]
async fn test_generate_shopping_list_basic() {
    let store = baking_store();

    let list = generate(&store, cake_recipes()).await;

    assert_eq!(list.aisle_count(), 1);
    assert_eq!(
        list.items("BAKING").unwrap(),
        &[
            "Flour (3cups)".to_string(),
            "Sugar (1cups) (also in SNACKS)".to_string()
        ]
    );
    assert_eq!(store.searched(), vec!["flour", "sugar"]);
}

#[tokio::test]
async fn test_ingredient_without_products_is_unknown() {
    let store = baking_store();
    let mut recipes = cake_recipes();
    recipes.push(vec![Ingredient::new("saffron", "g", 0.5)]);

    let list = generate(&store, recipes).await;

    assert_eq!(list.items(UNKNOWN_AISLE).unwrap(), &["Saffron (0.5g)".to_string()]);
    assert_eq!(list.item_count(), 3);
}

#[tokio::test]
async fn test_one_search_per_name_across_units() {
    let store = baking_store();
    let recipes = vec![
        vec![Ingredient::new("flour", "cups", 2.0)],
        vec![Ingredient::new("flour", "g", 250.0)],
    ];

    let list = generate(&store, recipes).await;

    assert_eq!(store.searched(), vec!["flour"]);
    assert_eq!(
        list.items("BAKING").unwrap(),
        &["Flour (2cups)".to_string(), "Flour (250g)".to_string()]
    );
}

#[tokio::test]
async fn test_failed_search_only_affects_its_ingredient() {
    let store = baking_store().failing("sugar");

    let list = generate(&store, cake_recipes()).await;

    assert_eq!(list.items("BAKING").unwrap(), &["Flour (3cups)".to_string()]);
    assert_eq!(list.items(UNKNOWN_AISLE).unwrap(), &["Sugar (1cups)".to_string()]);
}

#[tokio::test]
async fn test_every_search_failing_is_reported_once() {
    let store = baking_store().failing("flour").failing("sugar");

    let result =
        generate_shopping_list(GenerateShoppingListCommand::new("store-1", cake_recipes()), &store)
            .await;

    match result {
        Err(ShoppingListError::LookupUnavailable(reason)) => {
            assert!(reason.contains("connection reset"));
        }
        other => panic!("Expected LookupUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_recipes_selected_is_rejected_before_searching() {
    let store = baking_store();

    let result =
        generate_shopping_list(GenerateShoppingListCommand::new("store-1", Vec::new()), &store)
            .await;

    assert!(matches!(result, Err(ShoppingListError::NoRecipesSelected)));
    assert!(store.searched().is_empty());
}

#[tokio::test]
async fn test_no_store_selected_is_rejected_before_searching() {
    let store = baking_store();

    for location_id in [None, Some("   ".to_string())] {
        let cmd = GenerateShoppingListCommand {
            location_id,
            ingredient_lists: cake_recipes(),
            lookup_concurrency: 1,
        };

        let result = generate_shopping_list(cmd, &store).await;

        assert!(matches!(result, Err(ShoppingListError::NoStoreSelected)));
    }
    assert!(store.searched().is_empty());
}

#[tokio::test]
async fn test_recipes_without_ingredients_is_no_results() {
    let store = baking_store();

    let outcome =
        generate_shopping_list(GenerateShoppingListCommand::new("store-1", vec![Vec::new()]), &store)
            .await
            .unwrap();

    assert_eq!(outcome, ShoppingListOutcome::NoResults);
}

#[tokio::test]
async fn test_concurrent_searches_keep_merge_order() {
    // The first names answer last
    let store = FakeStore::default()
        .with("eggs", vec![vec!["Dairy"]])
        .with("milk", vec![vec!["Dairy"]])
        .with("butter", vec![vec!["Dairy"]])
        .delayed("eggs", 60)
        .delayed("milk", 30);
    let recipes = vec![vec![
        Ingredient::new("eggs", "", 2.0),
        Ingredient::new("milk", "cups", 1.0),
        Ingredient::new("butter", "tbsp", 2.0),
    ]];

    let cmd = GenerateShoppingListCommand {
        lookup_concurrency: 3,
        ..GenerateShoppingListCommand::new("store-1", recipes)
    };
    let list = generate_shopping_list(cmd, &store)
        .await
        .unwrap()
        .into_list()
        .unwrap();

    assert_eq!(
        list.items("DAIRY").unwrap(),
        &[
            "Eggs (2)".to_string(),
            "Milk (1cups)".to_string(),
            "Butter (2tbsp)".to_string()
        ]
    );
}

#[tokio::test]
async fn test_recipe_order_changes_lines_not_content() {
    let store = baking_store();
    let mut reversed = cake_recipes();
    reversed.reverse();

    let forward = generate(&store, cake_recipes()).await;
    let backward = generate(&store, reversed).await;

    let mut forward_lines: Vec<String> = forward.groups().flat_map(|g| g.items.to_vec()).collect();
    let mut backward_lines: Vec<String> = backward.groups().flat_map(|g| g.items.to_vec()).collect();
    forward_lines.sort();
    backward_lines.sort();

    assert_eq!(forward_lines, backward_lines);
}

#[tokio::test]
async fn test_export_round_trips() {
    let store = baking_store().with("basil", vec![vec!["Produce", "Herbs"], vec!["Produce"]]);
    let mut recipes = cake_recipes();
    recipes.push(vec![
        Ingredient::new("basil", "leaves", 6.0),
        Ingredient::new("salt", "tsp", "to taste"),
    ]);

    let list = generate(&store, recipes).await;
    let markdown = list.to_markdown();

    assert!(markdown.starts_with("**BAKING**\n- Flour (3cups)\n"));
    assert!(markdown.contains("- Basil (6leaves) (also in HERBS)\n"));
    assert!(markdown.contains("**UNKNOWN**\n- Salt (0tsp) (amount unclear)\n"));
    assert_eq!(GroupedShoppingList::from_markdown(&markdown).unwrap(), list);
}
