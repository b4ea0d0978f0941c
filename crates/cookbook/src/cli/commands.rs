//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Keyword to match against recipe names and ingredients
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Require a tag (repeatable; a recipe must carry all given tags)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Id of the recipe to show
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
///
/// The multi-value fields take comma-separated strings, mirroring how a
/// submitted form delivers them.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Recipe name
    #[arg(long)]
    pub name: String,

    /// Recipe author
    #[arg(long)]
    pub author: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Comma-separated ingredients
    #[arg(long, default_value = "")]
    pub ingredients: String,

    /// Comma-separated instruction steps
    #[arg(long, default_value = "")]
    pub instructions: String,

    /// Prep time in minutes
    #[arg(long, value_name = "MINUTES")]
    pub prep_time: String,

    /// Photo filename or URL
    #[arg(long)]
    pub photo: Option<String>,

    /// Replace the recipe with this id instead of creating a new one
    #[arg(long)]
    pub id: Option<String>,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Id of the recipe to remove
    pub id: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
