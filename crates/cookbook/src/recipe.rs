//! Recipe record model.
//!
//! This module defines the [`Recipe`] type, its normalization rules, and
//! the flat [`RecipeRecord`] representation used for on-disk storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// A single recipe in the catalog.
///
/// Construction normalizes the list fields: every entry is trimmed of
/// surrounding whitespace and empty entries are dropped, preserving order.
/// Duplicates are not removed at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Unique identifier, generated as a UUID when not supplied.
    pub id: String,

    /// Display title of the recipe.
    pub recipe_name: String,

    /// Who contributed the recipe.
    pub author: String,

    /// Tag strings (e.g. "Vegan", "Soup"), order-preserving.
    pub tags: Vec<String>,

    /// Ingredient strings, order-preserving.
    pub ingredients: Vec<String>,

    /// Instruction steps, order-significant.
    pub instructions: Vec<String>,

    /// Preparation time in minutes.
    pub prep_time: u32,

    /// Optional photo filename or URL.
    pub photo: Option<String>,
}

impl Recipe {
    /// Create a new recipe with a freshly generated id and no photo.
    #[must_use]
    pub fn new(
        recipe_name: impl Into<String>,
        author: impl Into<String>,
        tags: Vec<String>,
        ingredients: Vec<String>,
        instructions: Vec<String>,
        prep_time: u32,
    ) -> Self {
        Self {
            id: generate_id(),
            recipe_name: recipe_name.into().trim().to_string(),
            author: author.into().trim().to_string(),
            tags: normalize_entries(tags),
            ingredients: normalize_entries(ingredients),
            instructions: normalize_entries(instructions),
            prep_time,
            photo: None,
        }
    }

    /// Replace the generated id with one loaded from storage or supplied
    /// by a caller. An empty id is treated as "not supplied" and leaves
    /// the generated id in place.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !id.is_empty() {
            self.id = id;
        }
        self
    }

    /// Attach a photo filename or URL.
    #[must_use]
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Build a recipe from form-style fields where tags, ingredients and
    /// instructions arrive as single comma-separated strings.
    ///
    /// Each comma-separated part is trimmed and empty parts are dropped
    /// before normal construction applies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `prep_time` cannot be read as a
    /// non-negative whole number of minutes.
    pub fn from_delimited_fields(
        recipe_name: &str,
        author: &str,
        tags_csv: &str,
        ingredients_csv: &str,
        instructions_csv: &str,
        prep_time: &str,
        photo: Option<String>,
    ) -> Result<Self> {
        let minutes: u32 = prep_time.trim().parse().map_err(|_| {
            Error::validation(format!(
                "prep time {prep_time:?} is not a whole number of minutes"
            ))
        })?;

        let mut recipe = Self::new(
            recipe_name,
            author,
            split_delimited(tags_csv),
            split_delimited(ingredients_csv),
            split_delimited(instructions_csv),
            minutes,
        );
        if let Some(photo) = photo {
            recipe = recipe.with_photo(photo);
        }
        Ok(recipe)
    }

    /// Convert to the flat record representation stored on disk.
    #[must_use]
    pub fn to_record(&self) -> RecipeRecord {
        RecipeRecord {
            id: Some(self.id.clone()),
            recipe_name: self.recipe_name.clone(),
            author: self.author.clone(),
            tags: Some(self.tags.clone()),
            ingredients: Some(self.ingredients.clone()),
            instructions: Some(self.instructions.clone()),
            prep_time: self.prep_time,
            photo: self.photo.clone(),
        }
    }

    /// Reconstruct a recipe from its stored record.
    ///
    /// Absent or null list fields read as empty, a missing prep time reads
    /// as zero, and a missing or empty id triggers fresh-id generation.
    #[must_use]
    pub fn from_record(record: RecipeRecord) -> Self {
        let mut recipe = Self::new(
            record.recipe_name,
            record.author,
            record.tags.unwrap_or_default(),
            record.ingredients.unwrap_or_default(),
            record.instructions.unwrap_or_default(),
            record.prep_time,
        );
        if let Some(id) = record.id {
            recipe = recipe.with_id(id);
        }
        recipe.photo = record.photo;
        recipe
    }

    /// Short one-line summary suitable for lists.
    #[must_use]
    pub fn summary(&self) -> String {
        let tags = if self.tags.is_empty() {
            "no tags".to_string()
        } else {
            self.tags.join(", ")
        };
        format!(
            "{} by {}: {} ingredients, {} min prep, tags: {}",
            self.recipe_name,
            self.author,
            self.ingredients.len(),
            self.prep_time,
            tags
        )
    }

    /// Readable multi-line rendering of the whole recipe.
    #[must_use]
    pub fn full_text(&self) -> String {
        let ingredients = if self.ingredients.is_empty() {
            "- (no ingredients)".to_string()
        } else {
            self.ingredients
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        let instructions = if self.instructions.is_empty() {
            "No instructions provided.".to_string()
        } else {
            self.instructions
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {step}", i + 1))
                .collect::<Vec<_>>()
                .join("\n")
        };
        let photo_line = self
            .photo
            .as_ref()
            .map(|photo| format!("\nPhoto: {photo}\n"))
            .unwrap_or_default();
        format!(
            "{}\nby {} - {} minute prep\n{}\nIngredients:\n{}\n\nInstructions:\n{}",
            self.recipe_name, self.author, self.prep_time, photo_line, ingredients, instructions
        )
    }
}

/// Flat on-disk representation of a [`Recipe`].
///
/// The read side is tolerant: list fields accept null or absent values as
/// empty, and every other field falls back to a neutral default so that a
/// partially written record still round-trips into a usable recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Stored identifier; absent or empty triggers fresh-id generation.
    #[serde(default)]
    pub id: Option<String>,

    /// Display title, defaults to empty.
    #[serde(default)]
    pub recipe_name: String,

    /// Author, defaults to empty.
    #[serde(default)]
    pub author: String,

    /// Tag strings; null and absent both read as empty.
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Ingredient strings; null and absent both read as empty.
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,

    /// Instruction steps; null and absent both read as empty.
    #[serde(default)]
    pub instructions: Option<Vec<String>>,

    /// Preparation time in minutes, defaults to zero.
    #[serde(default)]
    pub prep_time: u32,

    /// Photo filename or URL; written as null when unset.
    #[serde(default)]
    pub photo: Option<String>,
}

/// Generate a fresh unique recipe id.
fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Trim every entry and drop the ones left empty, preserving order.
fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Split a comma-separated field into trimmed, non-empty parts.
fn split_delimited(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
