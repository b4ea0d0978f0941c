//! Persistence layer for cookbook.
//!
//! This module stores each recipe as its own JSON file inside a configured
//! directory, with the file name derived from the recipe id. Loading the
//! whole catalog is best-effort: a file that cannot be read or parsed is
//! skipped and reported as a diagnostic instead of failing the listing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeRecord};

/// File extension for record files. Matching is case-sensitive.
const RECORD_EXTENSION: &str = "json";

/// File-backed store with one JSON record per recipe.
///
/// A single-writer, single-reader model applies: writes are plain
/// synchronous file replacements with no locking.
#[derive(Debug)]
pub struct RecipeStore {
    /// Directory containing the record files.
    dir: PathBuf,
}

/// A record file that [`RecipeStore::load_all`] could not read or parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path to the offending file.
    pub path: PathBuf,
    /// Why the file was skipped.
    pub reason: String,
}

/// The outcome of loading every record in the store.
///
/// Skipped files are surfaced here rather than failing the load, so one
/// corrupt record cannot break the whole catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Recipes that loaded successfully, in directory-enumeration order.
    pub recipes: Vec<Recipe>,
    /// Files that were skipped, with the reason for each.
    pub skipped: Vec<SkippedFile>,
}

impl RecipeStore {
    /// Open a store rooted at the given directory.
    ///
    /// Creates the directory and any missing parents; an already existing
    /// directory is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { dir: dir.into() };
        store.ensure_ready()?;
        debug!("Opened recipe store at {}", store.dir.display());
        Ok(store)
    }

    /// Get the store directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic path of the record file for a recipe id.
    #[must_use]
    pub fn recipe_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{RECORD_EXTENSION}"))
    }

    /// Load every recipe in the store.
    ///
    /// Files without the record extension are ignored. Files that cannot
    /// be read or parsed are skipped and reported in the outcome, each one
    /// also logged at warn level. Order follows directory enumeration and
    /// must not be assumed stable.
    ///
    /// # Errors
    ///
    /// Returns an error only if the directory itself cannot be created or
    /// enumerated; per-file failures never fail the load.
    pub fn load_all(&self) -> Result<LoadOutcome> {
        self.ensure_ready()?;

        let mut outcome = LoadOutcome::default();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            match Self::read_record(&path) {
                Ok(recipe) => outcome.recipes.push(recipe),
                Err(err) => {
                    warn!("Skipping unreadable record file {}: {}", path.display(), err);
                    outcome.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        debug!(
            "Loaded {} recipes ({} skipped)",
            outcome.recipes.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    /// Load a single recipe by id.
    ///
    /// Returns `Ok(None)` when no record file exists for the id. Unlike
    /// [`Self::load_all`], a file that exists but fails to parse is a
    /// genuine error here, so a broken record is not mistaken for a
    /// missing one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the record file exists but does not
    /// contain a parsable recipe, or an I/O error if it cannot be read.
    pub fn load_one(&self, id: &str) -> Result<Option<Recipe>> {
        let path = self.recipe_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_record(&path).map(Some)
    }

    /// Save a recipe, fully replacing any existing record for its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self, recipe: &Recipe) -> Result<()> {
        self.ensure_ready()?;

        let path = self.recipe_path(&recipe.id);
        let json = serde_json::to_string_pretty(&recipe.to_record())?;
        fs::write(&path, json)?;

        debug!("Saved recipe {} to {}", recipe.id, path.display());
        Ok(())
    }

    /// Remove the record file for a recipe id.
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let path = self.recipe_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        info!("Removed recipe {id}");
        Ok(true)
    }

    /// Count the record files in the store.
    ///
    /// Counts files by extension without parsing them, so corrupt records
    /// are included.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or enumerated.
    pub fn count(&self) -> Result<usize> {
        self.ensure_ready()?;

        let mut count = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(RECORD_EXTENSION) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Create the store directory if it does not exist yet.
    fn ensure_ready(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|source| Error::DirectoryCreate {
                path: self.dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Read and parse one record file.
    fn read_record(path: &Path) -> Result<Recipe> {
        let text = fs::read_to_string(path)?;
        let record: RecipeRecord = serde_json::from_str(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Recipe::from_record(record))
    }
}
