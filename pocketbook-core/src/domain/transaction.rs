//! Transaction domain model
//!
//! Transactions are transient values flowing from the Source through
//! categorization to the Ledger Store. They are never persisted locally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed column layout of the ledger sheet, in order.
pub const LEDGER_HEADER: [&str; 9] = [
    "Transaction ID",
    "Account ID",
    "Date",
    "Account Name",
    "Description",
    "Amount",
    "Category",
    "Notes",
    "Timestamp",
];

/// Number of leading columns compared during reconciliation. The trailing
/// timestamp column is informational only.
pub const COMPARED_COLUMNS: usize = LEDGER_HEADER.len() - 1;

/// A single financial transaction as the Source reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Provider-assigned identifier; the reconciliation key
    pub id: String,
    pub account_id: String,
    /// ISO date string (YYYY-MM-DD) as reported by the provider
    pub date: String,
    pub account_name: String,
    pub description: String,
    /// Signed amount; serializes as a decimal string
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Render this transaction as a ledger row, stamped with the given
    /// write timestamp in the trailing column.
    pub fn to_ledger_row(&self, timestamp: &str) -> Vec<String> {
        vec![
            self.id.clone(),
            self.account_id.clone(),
            self.date.clone(),
            self.account_name.clone(),
            self.description.clone(),
            self.amount.to_string(),
            self.category.clone().unwrap_or_default(),
            self.notes.clone().unwrap_or_default(),
            timestamp.to_string(),
        ]
    }
}
