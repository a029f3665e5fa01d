//! In-memory ledger store for tests
//!
//! Implements the full LedgerStore contract over a Vec of rows and counts
//! every write-side call, so tests can assert not just on final state but
//! on the traffic an export pass generated. Failure knobs simulate an
//! unconfigured store and unreadable rows.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::domain::result::{Error, Result};
use crate::ports::ledger::{parse_start_row, LedgerStore, RangeWrite, Row};

pub struct MemoryLedger {
    rows: Mutex<Vec<Row>>,
    configured: bool,
    fail_row_reads: Mutex<HashSet<usize>>,
    update_calls: AtomicUsize,
    insert_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            configured: true,
            fail_row_reads: Mutex::new(HashSet::new()),
            update_calls: AtomicUsize::new(0),
            insert_calls: AtomicUsize::new(0),
            write_calls: AtomicUsize::new(0),
        }
    }

    /// A ledger whose `ensure_sheet` fails, as when credentials or the
    /// spreadsheet id are missing
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Make targeted reads of the given 1-indexed sheet row fail
    pub fn fail_read_of_row(&self, sheet_row: usize) {
        self.fail_row_reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(sheet_row);
    }

    /// Snapshot of all rows, header included
    pub fn rows(&self) -> Vec<Row> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Row>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_at(rows: &mut Vec<Row>, start_row: usize, values: &[Row]) {
        for (i, value) in values.iter().enumerate() {
            let index = start_row - 1 + i;
            while rows.len() <= index {
                rows.push(Row::new());
            }
            rows[index] = value.clone();
        }
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryLedger {
    fn ensure_sheet(&self, header: &[&str]) -> Result<()> {
        if !self.configured {
            return Err(Error::config("ledger store not configured"));
        }

        let mut rows = self.lock();
        if rows.is_empty() {
            rows.push(header.iter().map(|c| c.to_string()).collect());
        }
        Ok(())
    }

    fn read_range(&self, range: &str) -> Result<Vec<Row>> {
        let rows = self.lock();

        match parse_start_row(range) {
            None => Ok(rows.clone()),
            Some(row) => {
                let failing = self
                    .fail_row_reads
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                if failing.contains(&row) {
                    return Err(Error::Ledger(format!("row {row} unreadable")));
                }
                Ok(rows.get(row - 1).cloned().into_iter().collect())
            }
        }
    }

    fn write_range(&self, range: &str, values: &[Row]) -> Result<()> {
        let start = parse_start_row(range)
            .ok_or_else(|| Error::Ledger(format!("range has no start row: {range}")))?;

        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.lock();
        Self::write_at(&mut rows, start, values);
        Ok(())
    }

    fn batch_update(&self, writes: &[RangeWrite]) -> Result<usize> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.lock();
        for write in writes {
            let start = parse_start_row(&write.range)
                .ok_or_else(|| Error::Ledger(format!("range has no start row: {}", write.range)))?;
            Self::write_at(&mut rows, start, &write.values);
        }
        Ok(writes.len())
    }

    fn insert_rows(&self, at_index: usize, count: usize) -> Result<()> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.lock();
        let at = at_index.min(rows.len());
        rows.splice(at..at, std::iter::repeat(Row::new()).take(count));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_sheet_writes_header_once() {
        let ledger = MemoryLedger::new();
        ledger.ensure_sheet(&["A", "B"]).unwrap();
        ledger.ensure_sheet(&["A", "B"]).unwrap();
        assert_eq!(ledger.rows(), vec![vec!["A".to_string(), "B".to_string()]]);
    }

    #[test]
    fn test_insert_rows_shifts_existing() {
        let ledger = MemoryLedger::new();
        ledger.ensure_sheet(&["H"]).unwrap();
        ledger
            .write_range("A2", &[vec!["old".to_string()]])
            .unwrap();

        ledger.insert_rows(1, 2).unwrap();
        ledger
            .write_range("A2", &[vec!["n1".to_string()], vec!["n2".to_string()]])
            .unwrap();

        let first: Vec<String> = ledger.rows().iter().map(|r| r[0].clone()).collect();
        assert_eq!(first, vec!["H", "n1", "n2", "old"]);
    }

    #[test]
    fn test_targeted_read_failure() {
        let ledger = MemoryLedger::new();
        ledger.ensure_sheet(&["H"]).unwrap();
        ledger.fail_read_of_row(2);

        assert!(ledger.read_range("A2:I2").is_err());
        assert!(ledger.read_range("A:I").is_ok());
    }
}
