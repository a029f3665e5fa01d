//! Pocketbook CLI - bank data aggregation in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{accounts, categories, enroll, export, mappings, tokens, transactions};

/// Pocketbook - categorized bank data, exported to your ledger
#[derive(Parser)]
#[command(name = "pb", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List accounts visible to a credential
    Accounts {
        /// Access token (overrides any stored credential)
        #[arg(long)]
        token: Option<String>,
        /// Institution whose stored credential to use
        #[arg(long)]
        institution: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categorized transactions for an account
    Transactions {
        /// Account ID as the provider reports it
        account_id: String,
        /// Access token (overrides any stored credential)
        #[arg(long)]
        token: Option<String>,
        /// Institution whose stored credential to use
        #[arg(long)]
        institution: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export an account's transactions into the ledger
    Export {
        /// Account ID as the provider reports it
        account_id: String,
        /// Access token (overrides any stored credential)
        #[arg(long)]
        token: Option<String>,
        /// Institution whose stored credential to use
        #[arg(long)]
        institution: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: categories::CategoryCommands,
    },

    /// Manage description-pattern rules
    Mappings {
        #[command(subcommand)]
        command: mappings::MappingCommands,
    },

    /// Manage stored institution credentials
    Tokens {
        #[command(subcommand)]
        command: tokens::TokenCommands,
    },

    /// Store a credential from an enrollment payload file
    Enroll {
        /// Path to the JSON payload the provider's connect flow returned
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Accounts {
            token,
            institution,
            json,
        } => accounts::run(token, institution, json),
        Commands::Transactions {
            account_id,
            token,
            institution,
            json,
        } => transactions::run(&account_id, token, institution, json),
        Commands::Export {
            account_id,
            token,
            institution,
            json,
        } => export::run(&account_id, token, institution, json),
        Commands::Categories { command } => categories::run(command),
        Commands::Mappings { command } => mappings::run(command),
        Commands::Tokens { command } => tokens::run(command),
        Commands::Enroll { file } => enroll::run(&file),
    }
}
