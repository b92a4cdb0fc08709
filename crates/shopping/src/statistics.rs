use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::formatter::single_line;
use crate::quantity::null_as_default;

/// Label used when a store reports an aisle without a description
pub const OTHER_AISLE: &str = "OTHER";

/// Label used for ingredients no product could be located for
pub const UNKNOWN_AISLE: &str = "UNKNOWN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AisleLocation {
    #[serde(default)]
    pub description: Option<String>,
}

impl AisleLocation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub aisle_locations: Vec<AisleLocation>,
}

impl Product {
    pub fn in_aisles<I, S>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            aisle_locations: descriptions.into_iter().map(AisleLocation::new).collect(),
        }
    }
}

/// Products returned by one search for an ingredient name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchResult {
    pub term: String,
    pub products: Vec<Product>,
}

impl ProductSearchResult {
    pub fn new(term: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            term: term.into(),
            products,
        }
    }

    pub fn empty(term: impl Into<String>) -> Self {
        Self::new(term, Vec::new())
    }
}

/// Normalize a free-text aisle description into a grouping label
pub fn normalize_aisle(description: Option<&str>) -> String {
    match description.map(single_line) {
        Some(label) if !label.is_empty() => label.to_uppercase(),
        _ => OTHER_AISLE.to_owned(),
    }
}

/// Aisle frequencies observed over every search of one shopping list
///
/// Counts are global: an aisle seen by the "flour" search also weighs in on
/// where "sugar" is placed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AisleStatistics {
    counts: HashMap<String, u32>,
    term_aisles: IndexMap<String, BTreeSet<String>>,
}

impl AisleStatistics {
    pub fn build<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductSearchResult>,
    {
        let mut stats = Self::default();

        for result in results {
            let aisles = stats.term_aisles.entry(result.term.to_owned()).or_default();

            for location in result.products.iter().flat_map(|p| p.aisle_locations.iter()) {
                let aisle = normalize_aisle(location.description.as_deref());
                *stats.counts.entry(aisle.to_owned()).or_insert(0) += 1;
                aisles.insert(aisle);
            }
        }

        tracing::debug!(
            terms = stats.term_aisles.len(),
            aisles = stats.counts.len(),
            "aisle statistics built"
        );

        stats
    }

    /// Global count for an aisle, 0 when it was never seen
    pub fn count(&self, aisle: &str) -> u32 {
        self.counts.get(aisle).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &HashMap<String, u32> {
        &self.counts
    }

    /// Distinct aisles seen for a term, `None` when the term was never searched
    pub fn aisles_for(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.term_aisles.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.term_aisles
            .iter()
            .map(|(term, aisles)| (term.as_str(), aisles))
    }
}
