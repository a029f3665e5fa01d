//! Reconciliation engine - merge transaction batches into the ledger
//!
//! Ensures each transaction appears exactly once in the external ledger:
//! new ids are inserted as one block under the header, changed rows get
//! targeted updates, unchanged rows are left alone.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::domain::result::Result;
use crate::domain::{Transaction, COMPARED_COLUMNS, LEDGER_HEADER};
use crate::ports::ledger::{row_range, LedgerStore, RangeWrite, Row, FULL_RANGE};

/// Outcome of one export pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportResult {
    /// New rows inserted under the header
    pub inserted: usize,
    /// Existing rows rewritten because a compared column differed
    pub updated: usize,
    /// Rows skipped because nothing but the timestamp would change
    pub skipped: usize,
}

/// Merges transaction batches into the external tabular ledger
pub struct Reconciler {
    ledger: Arc<dyn LedgerStore>,
}

impl Reconciler {
    pub fn new(ledger: Arc<dyn LedgerStore>) -> Self {
        Self { ledger }
    }

    /// Export a batch, inserting new transactions and updating changed
    /// ones. At most one logical write per transaction id per call.
    ///
    /// The update batch and the insert block are two separate remote
    /// calls; a failure between them leaves a partially-applied export.
    pub fn export(&self, batch: &[Transaction]) -> Result<ExportResult> {
        // Fail fast before any row is touched
        self.ledger.ensure_sheet(&LEDGER_HEADER)?;

        let existing = self.existing_rows()?;

        let timestamp = Utc::now().to_rfc3339();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut new_rows: Vec<Row> = Vec::new();
        let mut updates: Vec<RangeWrite> = Vec::new();
        let mut skipped = 0usize;

        for tx in batch {
            if !seen.insert(&tx.id) {
                skipped += 1;
                continue;
            }

            let row = tx.to_ledger_row(&timestamp);

            let Some(&sheet_row) = existing.get(&tx.id) else {
                new_rows.push(row);
                continue;
            };

            let range = row_range(sheet_row);
            match self.ledger.read_range(&range) {
                Ok(current) => {
                    let current = current.into_iter().next().unwrap_or_default();
                    if row_changed(&current, &row) {
                        updates.push(RangeWrite {
                            range,
                            values: vec![row],
                        });
                    } else {
                        skipped += 1;
                    }
                }
                Err(e) => {
                    // Degrades to an insert; the row may end up duplicated
                    warn!(
                        transaction_id = %tx.id,
                        error = %e,
                        "could not read existing ledger row, treating as new"
                    );
                    new_rows.push(row);
                }
            }
        }

        let updated = if updates.is_empty() {
            0
        } else {
            self.ledger.batch_update(&updates)?
        };

        let inserted = new_rows.len();
        if !new_rows.is_empty() {
            // One block right under the header, newest rows on top
            self.ledger.insert_rows(1, new_rows.len())?;
            self.ledger.write_range("A2", &new_rows)?;
        }

        Ok(ExportResult {
            inserted,
            updated,
            skipped,
        })
    }

    /// Map transaction id to its 1-indexed sheet row, skipping the header.
    /// The last occurrence wins for a (malformed) ledger with duplicates.
    fn existing_rows(&self) -> Result<HashMap<String, usize>> {
        let rows = self.ledger.read_range(FULL_RANGE)?;

        let mut map = HashMap::new();
        for (i, row) in rows.iter().enumerate().skip(1) {
            if let Some(id) = row.first() {
                if !id.is_empty() {
                    map.insert(id.clone(), i + 1);
                }
            }
        }
        Ok(map)
    }
}

/// Compare every column except the trailing write timestamp. A ragged
/// current row is compared only over the columns it has.
fn row_changed(current: &[String], candidate: &[String]) -> bool {
    current
        .iter()
        .take(COMPARED_COLUMNS)
        .zip(candidate)
        .any(|(a, b)| a != b)
}
