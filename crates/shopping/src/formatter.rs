use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeSeq};

use crate::aggregation::MergedIngredient;
use crate::assignment::AisleAssignment;
use crate::statistics::UNKNOWN_AISLE;

/// Error raised when a Markdown export cannot be read back
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExportParseError {
    #[error("Expected an aisle header, found: {0}")]
    MissingHeader(String),

    #[error("Expected a list item under aisle {aisle}, found: {line}")]
    InvalidItem { aisle: String, line: String },

    #[error("Aisle {0} has no items")]
    EmptyAisle(String),
}

/// Aisle buckets in first-use order, each holding formatted ingredient lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedShoppingList {
    groups: IndexMap<String, Vec<String>>,
}

/// Borrowed view of one aisle bucket
#[derive(Debug, Serialize)]
pub struct AisleGroup<'a> {
    pub aisle: &'a str,
    pub items: &'a [String],
}

impl GroupedShoppingList {
    pub fn push(&mut self, aisle: impl Into<String>, line: impl Into<String>) {
        self.groups.entry(aisle.into()).or_default().push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of aisle buckets
    pub fn aisle_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of lines over every bucket
    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn items(&self, aisle: &str) -> Option<&[String]> {
        self.groups.get(aisle).map(Vec::as_slice)
    }

    pub fn groups(&self) -> impl Iterator<Item = AisleGroup<'_>> {
        self.groups.iter().map(|(aisle, items)| AisleGroup {
            aisle: aisle.as_str(),
            items: items.as_slice(),
        })
    }

    /// Render as Markdown: a bold header per aisle, a bullet per line, a
    /// blank line after each aisle
    pub fn to_markdown(&self) -> String {
        let mut markdown = String::new();

        for group in self.groups() {
            markdown.push_str(&format!("**{}**\n", group.aisle));
            for item in group.items {
                markdown.push_str(&format!("- {}\n", item));
            }
            markdown.push('\n');
        }

        markdown
    }

    /// Read back a document produced by [`GroupedShoppingList::to_markdown`]
    pub fn from_markdown(markdown: &str) -> Result<Self, ExportParseError> {
        let mut list = Self::default();

        for block in markdown.split("\n\n") {
            let mut lines = block.lines().filter(|line| !line.trim().is_empty());
            let Some(header) = lines.next() else {
                continue;
            };

            let aisle = header
                .strip_prefix("**")
                .and_then(|h| h.strip_suffix("**"))
                .ok_or_else(|| ExportParseError::MissingHeader(header.to_owned()))?;

            let mut items = Vec::new();
            for line in lines {
                let item = line
                    .strip_prefix("- ")
                    .ok_or_else(|| ExportParseError::InvalidItem {
                        aisle: aisle.to_owned(),
                        line: line.to_owned(),
                    })?;
                items.push(item.to_owned());
            }

            if items.is_empty() {
                return Err(ExportParseError::EmptyAisle(aisle.to_owned()));
            }

            list.groups.entry(aisle.to_owned()).or_default().extend(items);
        }

        Ok(list)
    }
}

impl Serialize for GroupedShoppingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.groups.len()))?;
        for group in self.groups() {
            seq.serialize_element(&group)?;
        }
        seq.end()
    }
}

/// Final state of a shopping list build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListOutcome {
    Ready(GroupedShoppingList),
    /// Recipes were selected but nothing ended up on the list
    NoResults,
}

impl ShoppingListOutcome {
    pub fn into_list(self) -> Option<GroupedShoppingList> {
        match self {
            ShoppingListOutcome::Ready(list) => Some(list),
            ShoppingListOutcome::NoResults => None,
        }
    }
}

/// Shopping List Formatter
///
/// Turns merged ingredients and their aisle assignments into display lines
/// grouped by primary aisle. Assignments are looked up by ingredient name, so
/// "flour (cups)" and "flour (g)" always land in the same aisle.
pub struct ShoppingListFormatter;

impl ShoppingListFormatter {
    pub fn format<'a, I>(
        merged: I,
        assignments: &IndexMap<String, AisleAssignment>,
    ) -> ShoppingListOutcome
    where
        I: IntoIterator<Item = &'a MergedIngredient>,
    {
        let unknown = AisleAssignment::unknown();
        let mut list = GroupedShoppingList::default();

        for ingredient in merged {
            let assignment = assignments.get(&ingredient.name).unwrap_or(&unknown);
            list.push(
                assignment.primary.to_owned(),
                Self::line(ingredient, &assignment.secondary),
            );
        }

        if list.is_empty() {
            return ShoppingListOutcome::NoResults;
        }

        tracing::debug!(
            aisles = list.aisle_count(),
            items = list.item_count(),
            unknown = list.items(UNKNOWN_AISLE).map_or(0, <[String]>::len),
            "shopping list formatted"
        );

        ShoppingListOutcome::Ready(list)
    }

    /// `Flour (3cups)`, `Sugar (1cups) (also in SNACKS)`
    pub fn line(ingredient: &MergedIngredient, secondary: &[String]) -> String {
        let mut line = format!(
            "{} ({}{})",
            capitalize(&single_line(&ingredient.name)),
            ingredient.amount,
            single_line(&ingredient.unit)
        );

        if ingredient.is_ambiguous() {
            line.push_str(" (amount unclear)");
        }

        if !secondary.is_empty() {
            line.push_str(&format!(" (also in {})", secondary.join(", ")));
        }

        line
    }
}

/// Trim `value` and fold any line break, with the blanks around it, into one space
pub fn single_line(value: &str) -> String {
    value
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
