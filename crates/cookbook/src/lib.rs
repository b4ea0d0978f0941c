//! `cookbook` - a small recipe catalog stored as files on disk
//!
//! This library provides the core functionality for keeping recipes as
//! one JSON record file each and browsing them by keyword and tag.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod recipe;
pub mod store;

pub use catalog::{Catalog, Listing, RecipeForm};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{filter_recipes, normalize_tags};
pub use logging::init_logging;
pub use recipe::{Recipe, RecipeRecord};
pub use store::{LoadOutcome, RecipeStore, SkippedFile};
