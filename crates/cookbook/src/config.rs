//! Configuration management for cookbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::collections::HashSet;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "cookbook";

/// Directory under the data directory holding one file per recipe.
const RECIPES_DIR_NAME: &str = "recipes";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `COOKBOOK_`)
/// 2. TOML config file at `~/.config/cookbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Catalog configuration.
    pub catalog: CatalogConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per recipe.
    /// Defaults to `~/.local/share/cookbook/recipes`
    pub data_dir: Option<PathBuf>,
}

/// Catalog-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// The fixed list of tags recipes may be filtered by, in canonical
    /// casing. Requested tags are matched against this list
    /// case-insensitively.
    pub allowed_tags: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            allowed_tags: default_allowed_tags(),
        }
    }
}

/// Default canonical tag list.
fn default_allowed_tags() -> Vec<String> {
    [
        "Breakfast",
        "Lunch",
        "Dinner",
        "Dessert",
        "Snack",
        "Soup",
        "Salad",
        "Vegan",
        "Vegetarian",
        "Gluten-Free",
        "Quick",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `COOKBOOK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("COOKBOOK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for tag in &self.catalog.allowed_tags {
            if tag.trim().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "allowed_tags must not contain blank entries".to_string(),
                });
            }

            // Tag lookup is keyed on the lowercased form, so entries that
            // collide case-insensitively would shadow each other.
            if !seen.insert(tag.trim().to_lowercase()) {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "allowed_tags contains duplicate entry {tag:?} (tags match case-insensitively)"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Get the recipe directory, resolving defaults if not set.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(RECIPES_DIR_NAME))
    }

    /// Get the configured tag list.
    #[must_use]
    pub fn allowed_tags(&self) -> &[String] {
        &self.catalog.allowed_tags
    }
}
