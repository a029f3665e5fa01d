//! Aggregation facade - fetch, categorize, export
//!
//! The only component that talks to the external ports. Pulls raw data
//! from the Source, runs categorization over it, and hands export batches
//! to the reconciliation engine.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Transaction};
use crate::ports::TransactionSource;
use crate::services::Categorizer;
use crate::stores::CredentialStore;

pub struct Aggregator {
    source: Arc<dyn TransactionSource>,
    categorizer: Categorizer,
    credentials: Arc<CredentialStore>,
}

impl Aggregator {
    pub fn new(
        source: Arc<dyn TransactionSource>,
        categorizer: Categorizer,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Self {
            source,
            categorizer,
            credentials,
        }
    }

    /// Resolve the credential for a call: an explicitly supplied token wins,
    /// else the store is consulted by institution name.
    pub fn resolve_credential(
        &self,
        explicit: Option<&str>,
        institution: Option<&str>,
    ) -> Result<String> {
        if let Some(token) = explicit.filter(|t| !t.is_empty()) {
            return Ok(token.to_string());
        }

        if let Some(name) = institution {
            if let Some(token) = self.credentials.get_by_institution(name) {
                return Ok(token);
            }
        }

        Err(Error::Unauthorized(
            "valid access token required: supply one explicitly or name an enrolled institution"
                .to_string(),
        ))
    }

    /// List accounts visible to the credential, passed through unmodified
    pub fn fetch_accounts(&self, access_token: &str) -> Result<Vec<Account>> {
        self.source.list_accounts(access_token)
    }

    /// List an account's transactions, filling in the category of every
    /// transaction the Source left uncategorized.
    pub fn fetch_transactions(
        &self,
        access_token: &str,
        account_id: &str,
    ) -> Result<Vec<Transaction>> {
        let mut transactions = self.source.list_transactions(access_token, account_id)?;
        for tx in &mut transactions {
            self.categorizer.fill(tx);
        }
        Ok(transactions)
    }

    /// Fill missing categories in a caller-supplied batch
    pub fn categorize_batch(&self, mut transactions: Vec<Transaction>) -> Vec<Transaction> {
        for tx in &mut transactions {
            self.categorizer.fill(tx);
        }
        transactions
    }
}
