//! Mappings command - manage description-pattern rules

use anyhow::Result;
use clap::Subcommand;

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum MappingCommands {
    /// List rules in precedence order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or replace a rule (an existing pattern keeps its precedence)
    Add {
        /// Description substring to match, case-insensitive
        pattern: String,
        /// Category id to assign
        category_id: String,
    },

    /// Delete a rule by pattern
    Delete { pattern: String },
}

pub fn run(command: MappingCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        MappingCommands::List { json } => {
            let mappings = ctx.mappings.list();
            if json {
                println!("{}", serde_json::to_string_pretty(&mappings)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Pattern", "Category"]);
            for mapping in &mappings {
                let category = ctx
                    .categories
                    .name_of(&mapping.category_id)
                    .unwrap_or_else(|| format!("{} (deleted)", mapping.category_id));
                table.add_row(vec![mapping.pattern.clone(), category]);
            }
            println!("{table}");
        }

        MappingCommands::Add {
            pattern,
            category_id,
        } => {
            ctx.mappings.add(&pattern, &category_id)?;
            output::success(&format!("Mapped '{pattern}' to {category_id}"));
        }

        MappingCommands::Delete { pattern } => {
            ctx.mappings.delete(&pattern)?;
            output::success(&format!("Deleted rule '{pattern}'"));
        }
    }

    Ok(())
}
