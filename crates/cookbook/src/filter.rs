//! Keyword and tag filtering over in-memory recipes.
//!
//! This module implements the browse-time filter: a free-text keyword
//! matched against recipe names and ingredients, and a set of requested
//! tags matched against each recipe's own tag list.
//!
//! # Example
//!
//! ```
//! use cookbook::filter::filter_recipes;
//! use cookbook::recipe::Recipe;
//!
//! let recipes = vec![Recipe::new(
//!     "Chocolate Cake",
//!     "Ada",
//!     vec!["Dessert".to_string()],
//!     vec!["flour".to_string(), "cocoa".to_string()],
//!     vec!["bake".to_string()],
//!     45,
//! )];
//!
//! let hits = filter_recipes(recipes, "choc", &[], &[]);
//! assert_eq!(hits.len(), 1);
//! ```

use std::collections::HashMap;

use crate::recipe::Recipe;

/// Clean up a list of requested tags against the configured tag list.
///
/// Each requested tag is trimmed and matched case-insensitively against
/// `allowed`. Blank entries and tags not present in `allowed` are dropped
/// without error. Survivors come back in the canonical casing from
/// `allowed`, deduplicated, in first-occurrence order.
#[must_use]
pub fn normalize_tags(requested: &[String], allowed: &[String]) -> Vec<String> {
    let lookup: HashMap<String, &str> = allowed
        .iter()
        .map(|tag| (tag.to_lowercase(), tag.as_str()))
        .collect();

    let mut cleaned: Vec<String> = Vec::new();
    for raw in requested {
        let key = raw.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        if let Some(&canonical) = lookup.get(&key) {
            if !cleaned.iter().any(|tag| tag == canonical) {
                cleaned.push(canonical.to_string());
            }
        }
    }

    cleaned
}

/// Filter recipes by keyword and requested tags.
///
/// An empty (or whitespace-only) query disables the keyword stage; an
/// empty normalized tag set disables the tag stage. A recipe passes the
/// keyword stage when the lowercased query appears in its lowercased name
/// or in at least one lowercased ingredient. It passes the tag stage when
/// every normalized tag appears verbatim in its own tag list. Input order
/// is preserved and no ranking is applied.
#[must_use]
pub fn filter_recipes(
    recipes: Vec<Recipe>,
    query: &str,
    requested_tags: &[String],
    allowed_tags: &[String],
) -> Vec<Recipe> {
    let query = query.trim().to_lowercase();
    let tags = normalize_tags(requested_tags, allowed_tags);

    recipes
        .into_iter()
        .filter(|recipe| {
            if !query.is_empty() && !matches_query(recipe, &query) {
                return false;
            }
            if !tags.is_empty() && !has_all_tags(recipe, &tags) {
                return false;
            }
            true
        })
        .collect()
}

/// Keyword stage: substring match on name or any ingredient.
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.recipe_name.to_lowercase().contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query))
}

/// Tag stage: every requested tag must be present verbatim.
fn has_all_tags(recipe: &Recipe, tags: &[String]) -> bool {
    tags.iter().all(|tag| recipe.tags.contains(tag))
}
