//! `ckbk` - CLI for the cookbook recipe catalog.
//!
//! This binary provides the command-line interface for browsing and
//! managing the recipe catalog.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::bail;
use clap::Parser;

use cookbook::catalog::{Catalog, Listing, RecipeForm};
use cookbook::cli::{
    AddCommand, Cli, Command, ConfigCommand, ListCommand, OutputFormat, RemoveCommand, ShowCommand,
};
use cookbook::recipe::Recipe;
use cookbook::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Show(cmd) => handle_show(&config, &cmd),
        Command::Add(cmd) => handle_add(&config, cmd),
        Command::Remove(cmd) => handle_remove(&config, &cmd),
        Command::Tags => handle_tags(&config),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let catalog = Catalog::open(config)?;
    let listing = catalog.list(&cmd.query, &cmd.tags)?;
    report_skipped(&listing);

    match cmd.format {
        OutputFormat::Plain => {
            for recipe in &listing.recipes {
                println!("{}  {}", recipe.id, recipe.summary());
            }
            if listing.recipes.is_empty() {
                println!("No recipes matched.");
            }
        }
        OutputFormat::Table => {
            println!(
                "{:<38} {:<28} {:<20} {:>8}",
                "ID", "NAME", "AUTHOR", "PREP"
            );
            for recipe in &listing.recipes {
                println!(
                    "{:<38} {:<28} {:<20} {:>8}",
                    recipe.id,
                    recipe.recipe_name,
                    recipe.author,
                    format!("{} min", recipe.prep_time)
                );
            }
        }
        OutputFormat::Json => {
            let records: Vec<_> = listing.recipes.iter().map(Recipe::to_record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let catalog = Catalog::open(config)?;
    let Some(recipe) = catalog.get(&cmd.id)? else {
        bail!("no recipe with id {}", cmd.id);
    };

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&recipe.to_record())?);
    } else {
        println!("{}", recipe.full_text());
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: AddCommand) -> anyhow::Result<()> {
    let catalog = Catalog::open(config)?;
    let form = RecipeForm {
        id: cmd.id,
        recipe_name: cmd.name,
        author: cmd.author,
        tags: cmd.tags,
        ingredients: cmd.ingredients,
        instructions: cmd.instructions,
        prep_time: cmd.prep_time,
        photo: cmd.photo,
    };

    let recipe = catalog.create_or_update(&form)?;
    println!("Saved recipe {}", recipe.id);
    println!("{}", recipe.summary());
    Ok(())
}

fn handle_remove(config: &Config, cmd: &RemoveCommand) -> anyhow::Result<()> {
    let catalog = Catalog::open(config)?;
    if catalog.remove(&cmd.id)? {
        println!("Removed recipe {}", cmd.id);
    } else {
        println!("No recipe with id {}", cmd.id);
    }
    Ok(())
}

fn handle_tags(config: &Config) -> anyhow::Result<()> {
    for tag in config.allowed_tags() {
        println!("{tag}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Recipe directory:   {}", config.data_dir().display());
                println!();
                println!("[Catalog]");
                println!("  Allowed tags:       {}", config.allowed_tags().join(", "));
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn report_skipped(listing: &Listing) {
    for skipped in &listing.skipped {
        eprintln!(
            "warning: skipped unreadable record {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }
}
