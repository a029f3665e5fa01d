//! Integration tests for pocketbook-core
//!
//! These tests exercise the full pipeline - demo source, categorization,
//! reconciliation - through the public context, with real files backing
//! the stores. Network IO does not exist in the core; the ledger is either
//! in-memory or a real CSV file on disk.

use std::sync::Arc;

use tempfile::TempDir;

use pocketbook_core::adapters::{CsvLedger, DemoSource, MemoryLedger};
use pocketbook_core::config::Config;
use pocketbook_core::domain::NewCategory;
use pocketbook_core::ports::LedgerStore;
use pocketbook_core::{PocketbookContext, UNCATEGORIZED};

fn context_with_memory_ledger(dir: &TempDir) -> (Arc<MemoryLedger>, PocketbookContext) {
    let config = Config::load(dir.path());
    let ledger = Arc::new(MemoryLedger::new());
    let ctx = PocketbookContext::new(
        config,
        Arc::new(DemoSource::new()),
        Arc::clone(&ledger) as Arc<dyn LedgerStore>,
    )
    .expect("context should open on an empty data dir");
    (ledger, ctx)
}

fn seed_rules(ctx: &PocketbookContext) {
    for (id, name, pattern) in [
        ("cat_coffee", "Coffee", "starbucks"),
        ("cat_groceries", "Groceries", "whole foods"),
        ("cat_income", "Income", "payroll"),
    ] {
        ctx.categories
            .add(NewCategory {
                id: Some(id.to_string()),
                name: name.to_string(),
                color: None,
            })
            .unwrap();
        ctx.mappings.add(pattern, id).unwrap();
    }
}

#[test]
fn test_fetch_categorize_export_pipeline() {
    let dir = TempDir::new().unwrap();
    let (ledger, ctx) = context_with_memory_ledger(&dir);
    seed_rules(&ctx);

    let transactions = ctx
        .aggregator
        .fetch_transactions("demo_token", "acc_checking")
        .unwrap();

    // Every transaction carries a category after the facade ran
    assert!(transactions.iter().all(|t| t.category.is_some()));
    assert!(transactions
        .iter()
        .any(|t| t.category.as_deref() == Some("Coffee")));
    assert!(transactions
        .iter()
        .any(|t| t.category.as_deref() == Some(UNCATEGORIZED)));

    let result = ctx.exporter.export(&transactions).unwrap();
    assert_eq!(result.inserted, transactions.len());
    assert_eq!(result.updated, 0);

    // Header plus one row per transaction
    assert_eq!(ledger.rows().len(), transactions.len() + 1);
}

#[test]
fn test_repeated_export_produces_no_writes() {
    let dir = TempDir::new().unwrap();
    let (ledger, ctx) = context_with_memory_ledger(&dir);
    seed_rules(&ctx);

    let transactions = ctx
        .aggregator
        .fetch_transactions("demo_token", "acc_checking")
        .unwrap();

    ctx.exporter.export(&transactions).unwrap();
    let (updates, inserts, writes) = (
        ledger.update_calls(),
        ledger.insert_calls(),
        ledger.write_calls(),
    );

    let second = ctx.exporter.export(&transactions).unwrap();
    assert_eq!(second.inserted, 0);
    assert_eq!(second.updated, 0);
    assert_eq!(second.skipped, transactions.len());
    assert_eq!(ledger.update_calls(), updates);
    assert_eq!(ledger.insert_calls(), inserts);
    assert_eq!(ledger.write_calls(), writes);
}

#[test]
fn test_edited_transaction_updates_without_duplication() {
    let dir = TempDir::new().unwrap();
    let (ledger, ctx) = context_with_memory_ledger(&dir);
    seed_rules(&ctx);

    let mut transactions = ctx
        .aggregator
        .fetch_transactions("demo_token", "acc_checking")
        .unwrap();
    ctx.exporter.export(&transactions).unwrap();
    let rows_before = ledger.rows().len();

    transactions[0].notes = Some("reviewed".to_string());
    let result = ctx.exporter.export(&transactions).unwrap();

    assert_eq!(result.updated, 1);
    assert_eq!(result.inserted, 0);
    assert_eq!(result.skipped, transactions.len() - 1);
    assert_eq!(ledger.rows().len(), rows_before);
}

#[test]
fn test_csv_ledger_export_is_idempotent_across_reopen() {
    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("ledger.csv");

    let config = Config::load(dir.path());
    let ctx = PocketbookContext::new(
        config,
        Arc::new(DemoSource::new()),
        Arc::new(CsvLedger::new(&ledger_path)),
    )
    .unwrap();
    seed_rules(&ctx);

    let transactions = ctx
        .aggregator
        .fetch_transactions("demo_token", "acc_savings")
        .unwrap();
    let first = ctx.exporter.export(&transactions).unwrap();
    assert_eq!(first.inserted, transactions.len());

    // A fresh adapter over the same file must see every id as existing
    let config = Config::load(dir.path());
    let ctx = PocketbookContext::new(
        config,
        Arc::new(DemoSource::new()),
        Arc::new(CsvLedger::new(&ledger_path)),
    )
    .unwrap();
    let transactions = ctx
        .aggregator
        .fetch_transactions("demo_token", "acc_savings")
        .unwrap();
    let second = ctx.exporter.export(&transactions).unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.updated, 0);
    assert_eq!(second.skipped, transactions.len());
}

#[test]
fn test_stores_persist_across_context_restarts() {
    let dir = TempDir::new().unwrap();

    {
        let (_ledger, ctx) = context_with_memory_ledger(&dir);
        seed_rules(&ctx);
        ctx.credentials
            .store_from_enrollment(
                serde_json::from_str(
                    r#"{"accessToken": "token_abc",
                        "enrollment": {"institution": {"name": "Chase"}}}"#,
                )
                .unwrap(),
            )
            .unwrap();
    }

    // New process, same data dir
    let (_ledger, ctx) = context_with_memory_ledger(&dir);
    assert_eq!(ctx.categories.list().len(), 3);
    assert_eq!(ctx.mappings.list().len(), 3);
    assert_eq!(
        ctx.aggregator.resolve_credential(None, Some("chase")).unwrap(),
        "token_abc"
    );
}
