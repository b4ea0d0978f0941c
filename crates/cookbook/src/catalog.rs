//! Catalog facade for presentation layers.
//!
//! This module wires the store and the filter together behind the small
//! interface a web page or CLI needs: list with filtering, fetch one,
//! create-or-replace, and remove. The store directory and the allowed
//! tag list both come from [`Config`] at construction time.

use crate::config::Config;
use crate::error::Result;
use crate::filter::filter_recipes;
use crate::recipe::Recipe;
use crate::store::{RecipeStore, SkippedFile};

/// The recipe catalog as seen by a presentation layer.
#[derive(Debug)]
pub struct Catalog {
    store: RecipeStore,
    allowed_tags: Vec<String>,
}

/// The result of a browse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Recipes that matched the query and tags, in load order.
    pub recipes: Vec<Recipe>,
    /// Record files the load had to skip.
    pub skipped: Vec<SkippedFile>,
}

/// Form-style input for creating or replacing a recipe.
///
/// Multi-value fields arrive as single comma-separated strings, the way a
/// submitted form delivers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    /// Replace the recipe with this id; absent or empty creates a new one.
    pub id: Option<String>,
    /// Display title.
    pub recipe_name: String,
    /// Author.
    pub author: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Comma-separated ingredients.
    pub ingredients: String,
    /// Comma-separated instruction steps.
    pub instructions: String,
    /// Prep time in minutes, as submitted text.
    pub prep_time: String,
    /// Optional photo filename or URL.
    pub photo: Option<String>,
}

impl Catalog {
    /// Open the catalog described by the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created.
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self {
            store: RecipeStore::open(config.data_dir())?,
            allowed_tags: config.allowed_tags().to_vec(),
        })
    }

    /// Get the configured tag list.
    #[must_use]
    pub fn allowed_tags(&self) -> &[String] {
        &self.allowed_tags
    }

    /// Access the underlying store.
    #[must_use]
    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// List recipes matching a keyword query and requested tags.
    ///
    /// Loads the whole store and applies the filter; the listing carries
    /// any skipped-file diagnostics from the load alongside the matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be read.
    pub fn list(&self, query: &str, tags: &[String]) -> Result<Listing> {
        let outcome = self.store.load_all()?;
        let recipes = filter_recipes(outcome.recipes, query, tags, &self.allowed_tags);
        Ok(Listing {
            recipes,
            skipped: outcome.skipped,
        })
    }

    /// Fetch a single recipe by id, `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the record file exists but cannot be read or
    /// parsed.
    pub fn get(&self, id: &str) -> Result<Option<Recipe>> {
        self.store.load_one(id)
    }

    /// Build a recipe from form fields and save it.
    ///
    /// A form without an id creates a fresh recipe; a form with an id
    /// fully replaces the stored record for that id. Returns the recipe
    /// as stored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] if the form fields cannot be
    /// turned into a recipe, or a storage error if saving fails.
    pub fn create_or_update(&self, form: &RecipeForm) -> Result<Recipe> {
        let mut recipe = Recipe::from_delimited_fields(
            &form.recipe_name,
            &form.author,
            &form.tags,
            &form.ingredients,
            &form.instructions,
            &form.prep_time,
            form.photo.clone(),
        )?;
        if let Some(id) = &form.id {
            recipe = recipe.with_id(id.clone());
        }
        self.store.save(&recipe)?;
        Ok(recipe)
    }

    /// Remove a recipe by id.
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the record file cannot be removed.
    pub fn remove(&self, id: &str) -> Result<bool> {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_catalog() -> (TempDir, Catalog) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.storage.data_dir = Some(dir.path().join("recipes"));
        config.catalog.allowed_tags = vec!["Vegan".to_string(), "Soup".to_string()];
        let catalog = Catalog::open(&config).expect("failed to open catalog");
        (dir, catalog)
    }

    fn soup_form() -> RecipeForm {
        RecipeForm {
            recipe_name: "Lentil Soup".to_string(),
            author: "Maya".to_string(),
            tags: "Soup, Vegan".to_string(),
            ingredients: "lentils, carrots".to_string(),
            instructions: "chop, simmer".to_string(),
            prep_time: "40".to_string(),
            ..RecipeForm::default()
        }
    }

    #[test]
    fn test_open_uses_configured_tags() {
        let (_dir, catalog) = create_test_catalog();
        assert_eq!(catalog.allowed_tags(), &["Vegan", "Soup"]);
    }

    #[test]
    fn test_create_and_get() {
        let (_dir, catalog) = create_test_catalog();
        let saved = catalog.create_or_update(&soup_form()).unwrap();

        let fetched = catalog.get(&saved.id).unwrap();
        assert_eq!(fetched, Some(saved));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (_dir, catalog) = create_test_catalog();
        assert!(catalog.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_create_or_update_replaces_by_id() {
        let (_dir, catalog) = create_test_catalog();
        let saved = catalog.create_or_update(&soup_form()).unwrap();

        let mut edited = soup_form();
        edited.id = Some(saved.id.clone());
        edited.prep_time = "55".to_string();
        let replaced = catalog.create_or_update(&edited).unwrap();

        assert_eq!(replaced.id, saved.id);
        assert_eq!(catalog.get(&saved.id).unwrap().unwrap().prep_time, 55);
        assert_eq!(catalog.list("", &[]).unwrap().recipes.len(), 1);
    }

    #[test]
    fn test_create_or_update_rejects_bad_prep_time() {
        let (_dir, catalog) = create_test_catalog();
        let mut form = soup_form();
        form.prep_time = "a while".to_string();

        let err = catalog.create_or_update(&form).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_list_filters_by_query_and_tags() {
        let (_dir, catalog) = create_test_catalog();
        catalog.create_or_update(&soup_form()).unwrap();

        let mut toast = RecipeForm {
            recipe_name: "Toast".to_string(),
            author: "Sam".to_string(),
            ingredients: "bread".to_string(),
            prep_time: "5".to_string(),
            ..RecipeForm::default()
        };
        catalog.create_or_update(&toast).unwrap();

        let listing = catalog.list("lentil", &[]).unwrap();
        assert_eq!(listing.recipes.len(), 1);
        assert_eq!(listing.recipes[0].recipe_name, "Lentil Soup");

        let listing = catalog.list("", &["soup".to_string()]).unwrap();
        assert_eq!(listing.recipes.len(), 1);

        toast.recipe_name = "More Toast".to_string();
        catalog.create_or_update(&toast).unwrap();
        let listing = catalog.list("", &[]).unwrap();
        assert_eq!(listing.recipes.len(), 3);
    }

    #[test]
    fn test_list_surfaces_skipped_files() {
        let (_dir, catalog) = create_test_catalog();
        catalog.create_or_update(&soup_form()).unwrap();
        std::fs::write(catalog.store().recipe_path("broken"), "{ not json").unwrap();

        let listing = catalog.list("", &[]).unwrap();
        assert_eq!(listing.recipes.len(), 1);
        assert_eq!(listing.skipped.len(), 1);
    }

    #[test]
    fn test_remove() {
        let (_dir, catalog) = create_test_catalog();
        let saved = catalog.create_or_update(&soup_form()).unwrap();

        assert!(catalog.remove(&saved.id).unwrap());
        assert!(!catalog.remove(&saved.id).unwrap());
        assert!(catalog.get(&saved.id).unwrap().is_none());
    }
}
