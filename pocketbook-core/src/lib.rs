//! Pocketbook Core - business logic for personal finance aggregation
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Category, Transaction, Credential, etc.)
//! - **ports**: Trait definitions for external dependencies (TransactionSource, LedgerStore)
//! - **stores**: File-backed category, mapping, and credential stores
//! - **services**: Business logic orchestration (categorize, reconcile, aggregate)
//! - **adapters**: Concrete implementations (demo source, CSV ledger)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod stores;

use std::sync::Arc;

use config::Config;
use domain::result::Result;
use ports::{LedgerStore, TransactionSource};
use services::{Aggregator, Categorizer, Reconciler};
use stores::{CategoryStore, CredentialStore, MappingStore};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    Account, Category, CategoryUpdate, Credential, EnrollmentPayload, Mapping, NewCategory,
    Transaction,
};
pub use services::{ExportResult, UNCATEGORIZED};

/// Main context for Pocketbook operations
///
/// This is the primary entry point for all business logic. It opens the
/// three file-backed stores and wires the services around the injected
/// source and ledger ports.
pub struct PocketbookContext {
    pub config: Config,
    pub categories: Arc<CategoryStore>,
    pub mappings: Arc<MappingStore>,
    pub credentials: Arc<CredentialStore>,
    pub categorizer: Categorizer,
    pub aggregator: Aggregator,
    pub exporter: Reconciler,
}

impl PocketbookContext {
    /// Create a new Pocketbook context
    pub fn new(
        config: Config,
        source: Arc<dyn TransactionSource>,
        ledger: Arc<dyn LedgerStore>,
    ) -> Result<Self> {
        let categories = Arc::new(CategoryStore::open(&config.categories_file)?);
        let mappings = Arc::new(MappingStore::open(&config.mappings_file)?);
        let credentials = Arc::new(CredentialStore::open(&config.credentials_file)?);

        let categorizer = Categorizer::new(Arc::clone(&categories), Arc::clone(&mappings));
        let aggregator = Aggregator::new(source, categorizer.clone(), Arc::clone(&credentials));
        let exporter = Reconciler::new(ledger);

        Ok(Self {
            config,
            categories,
            mappings,
            credentials,
            categorizer,
            aggregator,
            exporter,
        })
    }
}
