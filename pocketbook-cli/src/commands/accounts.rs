//! Accounts command - list accounts visible to a credential

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(token: Option<String>, institution: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let token = ctx
        .aggregator
        .resolve_credential(token.as_deref(), institution.as_deref())?;
    let accounts = ctx.aggregator.fetch_accounts(&token)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Institution", "Type", "Last Four"]);
    for account in &accounts {
        table.add_row(vec![
            account.id.clone(),
            account.name.clone(),
            account.institution_name.clone().unwrap_or_default(),
            account.account_type.clone().unwrap_or_default(),
            account.last_four.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");

    Ok(())
}
