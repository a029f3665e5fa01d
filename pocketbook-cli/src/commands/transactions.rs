//! Transactions command - list categorized transactions for an account

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(
    account_id: &str,
    token: Option<String>,
    institution: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let token = ctx
        .aggregator
        .resolve_credential(token.as_deref(), institution.as_deref())?;
    let transactions = ctx.aggregator.fetch_transactions(&token, account_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Description", "Amount", "Category"]);
    for tx in &transactions {
        table.add_row(vec![
            tx.date.clone(),
            tx.description.clone(),
            tx.amount.to_string(),
            tx.category.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    println!("{} transactions", transactions.len());

    Ok(())
}
