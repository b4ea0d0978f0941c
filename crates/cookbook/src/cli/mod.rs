//! Command-line interface for cookbook.
//!
//! This module provides the CLI structure for the `ckbk` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, ListCommand, OutputFormat, RemoveCommand, ShowCommand,
};

/// ckbk - browse and manage a recipe catalog
///
/// Stores each recipe as its own JSON file in a data directory and lets
/// you search the catalog by keyword and tag.
#[derive(Debug, Parser)]
#[command(name = "ckbk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List recipes, filtered by keyword and tags
    List(ListCommand),

    /// Show a single recipe in full
    Show(ShowCommand),

    /// Add a recipe, or replace one by id
    Add(AddCommand),

    /// Remove a recipe
    Remove(RemoveCommand),

    /// List the configured tags
    Tags,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "ckbk");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["ckbk", "--quiet", "tags"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli::try_parse_from(["ckbk", "tags"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        let cli = Cli::try_parse_from(["ckbk", "-v", "tags"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli::try_parse_from(["ckbk", "-vv", "tags"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_list_with_filters() {
        let args = ["ckbk", "list", "-q", "soup", "-t", "Vegan", "-t", "Quick"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::List(cmd) => {
                assert_eq!(cmd.query, "soup");
                assert_eq!(cmd.tags, vec!["Vegan", "Quick"]);
                assert_eq!(cmd.format, OutputFormat::Plain);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_list_json_format() {
        let cli = Cli::try_parse_from(["ckbk", "list", "--format", "json"]).unwrap();
        match cli.command {
            Command::List(cmd) => assert_eq!(cmd.format, OutputFormat::Json),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["ckbk", "show", "abc-123"]).unwrap();
        match cli.command {
            Command::Show(cmd) => {
                assert_eq!(cmd.id, "abc-123");
                assert!(!cmd.json);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_parse_add() {
        let args = [
            "ckbk",
            "add",
            "--name",
            "Pancakes",
            "--author",
            "Ines",
            "--tags",
            "Breakfast, Quick",
            "--ingredients",
            "flour, eggs, milk",
            "--instructions",
            "mix, fry",
            "--prep-time",
            "15",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Add(cmd) => {
                assert_eq!(cmd.name, "Pancakes");
                assert_eq!(cmd.prep_time, "15");
                assert!(cmd.photo.is_none());
                assert!(cmd.id.is_none());
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_parse_remove() {
        let cli = Cli::try_parse_from(["ckbk", "remove", "abc-123"]).unwrap();
        assert!(matches!(cli.command, Command::Remove(_)));
    }

    #[test]
    fn test_parse_tags() {
        let cli = Cli::try_parse_from(["ckbk", "tags"]).unwrap();
        assert!(matches!(cli.command, Command::Tags));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["ckbk", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { .. })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["ckbk", "-c", "/custom/config.toml", "tags"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
