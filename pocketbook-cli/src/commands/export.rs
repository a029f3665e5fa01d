//! Export command - reconcile an account's transactions into the ledger

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
    let result = ctx.exporter.export(&transactions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::success(&format!(
        "Exported {} transactions to {}",
        transactions.len(),
        ctx.config.ledger_file.display()
    ));
    println!("  Inserted: {}", result.inserted);
    println!("  Updated: {}", result.updated);
    println!("  Unchanged: {}", result.skipped);

    Ok(())
}
