use dinnerizer_shopping::Ingredient;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DietaryRestriction {
    Vegetarian,
    GlutenFree,
    DairyFree,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Display label such as "30 min"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Tags such as `vegetarian`; unknown tags are kept but never filtered on
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl Recipe {
    pub fn has_restriction(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions
            .iter()
            .any(|tag| tag == restriction.as_ref())
    }
}
