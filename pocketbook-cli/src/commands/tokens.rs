//! Tokens command - manage stored institution credentials
//!
//! Listings never include the access token itself; only institution
//! metadata and timestamps leave the store.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use super::get_context;
use crate::output;

#[derive(Subcommand)]
pub enum TokenCommands {
    /// List stored credentials (tokens redacted)
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete the credential matching an access token
    Delete {
        /// The exact access token to remove
        token: String,
    },

    /// Delete every stored credential
    Clear,
}

/// Credential view with the secret stripped
#[derive(Serialize)]
struct RedactedCredential {
    institution_name: String,
    institution_id: Option<String>,
    enrollment_id: Option<String>,
    created_at: String,
    last_updated: String,
}

pub fn run(command: TokenCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        TokenCommands::List { json } => {
            let redacted: Vec<RedactedCredential> = ctx
                .credentials
                .list()
                .into_iter()
                .map(|c| RedactedCredential {
                    institution_name: c.institution_name,
                    institution_id: c.institution_id,
                    enrollment_id: c.enrollment_id,
                    created_at: c.created_at.to_rfc3339(),
                    last_updated: c.last_updated.to_rfc3339(),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&redacted)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Institution", "Enrollment", "Created", "Updated"]);
            for cred in &redacted {
                table.add_row(vec![
                    cred.institution_name.clone(),
                    cred.enrollment_id.clone().unwrap_or_default(),
                    cred.created_at.clone(),
                    cred.last_updated.clone(),
                ]);
            }
            println!("{table}");
        }

        TokenCommands::Delete { token } => {
            ctx.credentials.delete(&token)?;
            output::success("Deleted credential");
        }

        TokenCommands::Clear => {
            ctx.credentials.delete_all()?;
            output::success("Deleted all credentials");
        }
    }

    Ok(())
}
