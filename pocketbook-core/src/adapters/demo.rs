//! Demo transaction source for testing and demo mode
//!
//! Generates deterministic accounts and transactions so the pipeline can
//! be exercised end to end without a provider connection. Any non-empty
//! access token is accepted.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Transaction};
use crate::ports::TransactionSource;

const MERCHANTS: [(&str, i64); 8] = [
    ("STARBUCKS #1912 SEATTLE WA", -425),
    ("WHOLE FOODS MARKET #10236", -8732),
    ("NETFLIX.COM", -1549),
    ("SHELL OIL 57444298200", -5200),
    ("TARGET 00021212 PORTLAND OR", -3318),
    ("UBER TRIP HELP.UBER.COM", -1874),
    ("ACME CORP PAYROLL", 285000),
    ("TRANSFER TO SAVINGS", -50000),
];

pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }

    fn check_token(access_token: &str) -> Result<()> {
        if access_token.is_empty() {
            return Err(Error::upstream(401, "invalid access token"));
        }
        Ok(())
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionSource for DemoSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn list_accounts(&self, access_token: &str) -> Result<Vec<Account>> {
        Self::check_token(access_token)?;

        Ok(vec![
            Account {
                id: "acc_checking".to_string(),
                name: "Demo Checking".to_string(),
                institution_name: Some("First Platypus Bank".to_string()),
                account_type: Some("depository".to_string()),
                last_four: Some("4821".to_string()),
                currency: Some("USD".to_string()),
            },
            Account {
                id: "acc_savings".to_string(),
                name: "Demo Savings".to_string(),
                institution_name: Some("First Platypus Bank".to_string()),
                account_type: Some("depository".to_string()),
                last_four: Some("9907".to_string()),
                currency: Some("USD".to_string()),
            },
        ])
    }

    fn list_transactions(
        &self,
        access_token: &str,
        account_id: &str,
    ) -> Result<Vec<Transaction>> {
        Self::check_token(access_token)?;

        let account_name = match account_id {
            "acc_checking" => "Demo Checking",
            "acc_savings" => "Demo Savings",
            _ => return Err(Error::upstream(404, format!("unknown account: {account_id}"))),
        };

        let today = Utc::now().naive_utc().date();
        let transactions = (0..16)
            .map(|i| {
                let (description, cents) = MERCHANTS[i % MERCHANTS.len()];
                let date = today - Duration::days((i * 2) as i64);
                Transaction {
                    id: format!("txn_{}_{:03}", account_id, i + 1),
                    account_id: account_id.to_string(),
                    date: date.format("%Y-%m-%d").to_string(),
                    account_name: account_name.to_string(),
                    description: description.to_string(),
                    amount: Decimal::new(cents, 2),
                    category: None,
                    notes: None,
                }
            })
            .collect();

        Ok(transactions)
    }
}
