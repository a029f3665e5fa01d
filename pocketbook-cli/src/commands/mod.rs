//! CLI command implementations

pub mod accounts;
pub mod categories;
pub mod enroll;
pub mod export;
pub mod mappings;
pub mod tokens;
pub mod transactions;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use pocketbook_core::adapters::{CsvLedger, DemoSource};
use pocketbook_core::config::Config;
use pocketbook_core::PocketbookContext;

/// Resolve the pocketbook data directory: $POCKETBOOK_DIR, or ~/.pocketbook
fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("POCKETBOOK_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".pocketbook"))
}

/// Open the context over the demo source and the local CSV ledger
pub fn get_context() -> Result<PocketbookContext> {
    let config = Config::load(&data_dir()?);
    let ledger = Arc::new(CsvLedger::new(config.ledger_file.clone()));
    PocketbookContext::new(config, Arc::new(DemoSource::new()), ledger)
        .context("failed to open pocketbook data stores")
}
