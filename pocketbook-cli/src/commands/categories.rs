//! Categories command - manage user-defined categories

use anyhow::Result;
use clap::Subcommand;

use pocketbook_core::{CategoryUpdate, NewCategory};

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a category
    Add {
        /// Display name (must be unique)
        name: String,
        /// Display color, e.g. "#4caf50"
        #[arg(long)]
        color: Option<String>,
    },

    /// Update a category's name or color
    Update {
        /// Category id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category id
        id: String,
    },
}

pub fn run(command: CategoryCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        CategoryCommands::List { json } => {
            let categories = ctx.categories.list();
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Name", "Color"]);
            for category in &categories {
                table.add_row(vec![
                    category.id.clone(),
                    category.name.clone(),
                    category.color.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }

        CategoryCommands::Add { name, color } => {
            let category = ctx.categories.add(NewCategory {
                id: None,
                name,
                color,
            })?;
            output::success(&format!("Added category '{}' ({})", category.name, category.id));
        }

        CategoryCommands::Update { id, name, color } => {
            let category = ctx.categories.update(&id, CategoryUpdate { name, color })?;
            output::success(&format!("Updated category '{}'", category.name));
        }

        CategoryCommands::Delete { id } => {
            ctx.categories.delete(&id)?;
            output::success("Deleted category");
            output::warning("Rules still pointing at it will categorize as 'Uncategorized'");
        }
    }

    Ok(())
}
