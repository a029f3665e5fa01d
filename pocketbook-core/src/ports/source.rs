//! Transaction source port
//!
//! Defines the interface for fetching account and transaction data from
//! an open-banking provider. Concrete HTTP clients live outside the core;
//! the built-in demo adapter implements this trait for tests and demo mode.

use crate::domain::result::Result;
use crate::domain::{Account, Transaction};

/// Account and transaction data provider
///
/// A failing provider response must surface as `Error::Upstream` so callers
/// can tell it apart from a successful empty list.
pub trait TransactionSource: Send + Sync {
    /// Provider name (e.g., "demo")
    fn name(&self) -> &str;

    /// List accounts visible to the given bearer credential
    fn list_accounts(&self, access_token: &str) -> Result<Vec<Account>>;

    /// List transactions for one account
    fn list_transactions(&self, access_token: &str, account_id: &str)
        -> Result<Vec<Transaction>>;
}
