use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::quantity::{RawAmount, null_as_default};

/// Ingredient line of a single recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default)]
    pub amount: Option<RawAmount>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: impl Into<RawAmount>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount: Some(amount.into()),
        }
    }
}

/// Ingredient merged across every selected recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedIngredient {
    /// Name as written by the first recipe that mentioned it
    pub name: String,
    pub unit: String,
    pub amount: f64,
    /// Number of contributions whose amount could not be read as a number
    pub unparsed_amounts: usize,
}

impl MergedIngredient {
    pub fn is_ambiguous(&self) -> bool {
        self.unparsed_amounts > 0
    }
}

/// Merge key: lowercased name and the unit exactly as given
pub fn merge_key(name: &str, unit: &str) -> String {
    format!("{}||{}", name.to_lowercase(), unit)
}

/// Ingredient Aggregation Service
///
/// Stateless domain service that merges the ingredient lists of several
/// recipes into one entry per (name, unit):
/// - "Flour 2 cups" + "flour 1 cups" = "Flour 3 cups"
/// - "flour 1 cups" + "flour 200 g" = 2 separate entries (units are never converted)
///
/// The result iterates in first-occurrence order of each key.
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    pub fn merge<'a, I>(ingredient_lists: I) -> IndexMap<String, MergedIngredient>
    where
        I: IntoIterator<Item = &'a [Ingredient]>,
    {
        let mut merged: IndexMap<String, MergedIngredient> = IndexMap::new();

        for ingredient in ingredient_lists.into_iter().flatten() {
            let value = ingredient.amount.as_ref().and_then(RawAmount::value);
            if value.is_none() {
                tracing::warn!(
                    ingredient = %ingredient.name,
                    amount = ?ingredient.amount,
                    "ingredient amount is not a number, counting it as zero"
                );
            }

            let entry = merged
                .entry(merge_key(&ingredient.name, &ingredient.unit))
                .or_insert_with(|| MergedIngredient {
                    name: ingredient.name.to_owned(),
                    unit: ingredient.unit.to_owned(),
                    amount: 0.0,
                    unparsed_amounts: 0,
                });

            match value {
                Some(value) => entry.amount += value,
                None => entry.unparsed_amounts += 1,
            }
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_same_name_and_unit() {
        let recipe_a = vec![
            Ingredient::new("flour", "cups", 2.0),
            Ingredient::new("sugar", "cups", 1.0),
        ];
        let recipe_b = vec![Ingredient::new("flour", "cups", 1.0)];

        let merged = IngredientAggregationService::merge([recipe_a.as_slice(), recipe_b.as_slice()]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged["flour||cups"].amount, 3.0);
        assert_eq!(merged["sugar||cups"].amount, 1.0);
    }

    #[test]
    fn test_merge_is_case_insensitive_on_name_only() {
        let recipe = vec![
            Ingredient::new("Garlic", "cloves", 2.0),
            Ingredient::new("garlic", "cloves", 1.0),
            Ingredient::new("garlic", "Cloves", 4.0),
        ];

        let merged = IngredientAggregationService::merge([recipe.as_slice()]);

        assert_eq!(merged.len(), 2);
        let cloves = &merged["garlic||cloves"];
        assert_eq!(cloves.name, "Garlic");
        assert_eq!(cloves.amount, 3.0);
        assert_eq!(merged["garlic||Cloves"].amount, 4.0);
    }

    #[test]
    fn test_merge_keeps_first_occurrence_order() {
        let recipe_a = vec![Ingredient::new("onion", "", 1.0), Ingredient::new("rice", "g", 200.0)];
        let recipe_b = vec![Ingredient::new("basil", "leaves", 6.0), Ingredient::new("onion", "", 1.0)];

        let merged = IngredientAggregationService::merge([recipe_a.as_slice(), recipe_b.as_slice()]);
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["onion||", "rice||g", "basil||leaves"]);
    }

    #[test]
    fn test_merge_flags_unparsed_amounts() {
        let recipe = vec![
            Ingredient::new("salt", "tsp", "to taste"),
            Ingredient::new("salt", "tsp", "1/2"),
            Ingredient {
                name: "pepper".to_string(),
                unit: "tsp".to_string(),
                amount: None,
            },
        ];

        let merged = IngredientAggregationService::merge([recipe.as_slice()]);

        let salt = &merged["salt||tsp"];
        assert_eq!(salt.amount, 0.5);
        assert_eq!(salt.unparsed_amounts, 1);
        assert!(salt.is_ambiguous());

        let pepper = &merged["pepper||tsp"];
        assert_eq!(pepper.amount, 0.0);
        assert!(!pepper.amount.is_nan());
    }

    #[test]
    fn test_null_unit_reads_as_no_unit() {
        let recipe: Vec<Ingredient> = serde_json::from_str(
            r#"[{"name": "eggs", "unit": null, "amount": 2}, {"name": "eggs", "amount": 1}]"#,
        )
        .unwrap();

        let merged = IngredientAggregationService::merge([recipe.as_slice()]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged["eggs||"].unit, "");
        assert_eq!(merged["eggs||"].amount, 3.0);
    }

    #[test]
    fn test_merge_empty_input() {
        let merged = IngredientAggregationService::merge(std::iter::empty::<&[Ingredient]>());
        assert!(merged.is_empty());
    }
}
