//! Multi-field filtering over a recipe collection.
//!
//! A filter is the conjunction of a free-text search (case-insensitive
//! substring against title or description) and up to three categorical
//! equality constraints. Filtering is a pure projection: single pass,
//! order-preserving, no mutation of the input.

use crate::types::{Category, Cuisine, Difficulty, Recipe};

/// User-selected constraints for narrowing a recipe collection.
///
/// `None` on a categorical field is the "all" sentinel (unconstrained);
/// an empty search string matches everything. Call sites that do not
/// offer a dimension simply leave it `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub cuisine: Option<Cuisine>,
}

impl FilterCriteria {
    /// True when every dimension is unconstrained.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.cuisine.is_none()
    }

    /// Whether a single recipe satisfies every constraint at once.
    ///
    /// A recipe with no cuisine matches an unconstrained cuisine filter
    /// and fails any specific one.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe)
            && self.category.map_or(true, |c| recipe.category == c)
            && self.difficulty.map_or(true, |d| recipe.difficulty == d)
            && self.cuisine.map_or(true, |c| recipe.cuisine == Some(c))
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        recipe.title.to_lowercase().contains(&needle)
            || recipe.description.to_lowercase().contains(&needle)
    }
}

/// Select the recipes matching `criteria`, preserving input order.
///
/// Unconstrained criteria yield the full collection; no criteria
/// combination ever errors, and an empty input yields an empty output.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| criteria.matches(recipe))
        .collect()
}
