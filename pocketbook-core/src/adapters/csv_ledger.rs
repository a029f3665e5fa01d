//! CSV ledger store
//!
//! Implements the LedgerStore port over a local CSV file with the fixed
//! nine-column transaction layout. Every operation reads the whole file,
//! applies the change, and rewrites it - the same whole-document
//! persistence the JSON stores use.

use std::path::PathBuf;

use crate::domain::result::{Error, Result};
use crate::domain::LEDGER_HEADER;
use crate::ports::ledger::{parse_start_row, LedgerStore, RangeWrite, Row};

pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Row>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| Error::Ledger(e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Error::Ledger(e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn store(&self, rows: &[Row]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| Error::Ledger(e.to_string()))?;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| Error::Ledger(e.to_string()))?;
        }
        writer.flush().map_err(|e| Error::Ledger(e.to_string()))
    }

    /// Blank row wide enough to survive the CSV round trip; a zero-column
    /// record would be dropped as an empty line on re-read.
    fn blank_row() -> Row {
        vec![String::new(); LEDGER_HEADER.len()]
    }
}

impl LedgerStore for CsvLedger {
    fn ensure_sheet(&self, header: &[&str]) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::config("ledger file path not configured"));
        }

        let mut rows = self.load()?;
        let wanted: Row = header.iter().map(|c| c.to_string()).collect();

        if rows.is_empty() {
            rows.push(wanted);
        } else if rows[0].len() < header.len() {
            rows[0] = wanted;
        } else {
            return Ok(());
        }
        self.store(&rows)
    }

    fn read_range(&self, range: &str) -> Result<Vec<Row>> {
        let rows = self.load()?;
        match parse_start_row(range) {
            None => Ok(rows),
            Some(row) => Ok(rows.get(row - 1).cloned().into_iter().collect()),
        }
    }

    fn write_range(&self, range: &str, values: &[Row]) -> Result<()> {
        let start = parse_start_row(range)
            .ok_or_else(|| Error::Ledger(format!("range has no start row: {range}")))?;

        let mut rows = self.load()?;
        for (i, value) in values.iter().enumerate() {
            let index = start - 1 + i;
            while rows.len() <= index {
                rows.push(Self::blank_row());
            }
            rows[index] = value.clone();
        }
        self.store(&rows)
    }

    fn batch_update(&self, writes: &[RangeWrite]) -> Result<usize> {
        let mut rows = self.load()?;
        for write in writes {
            let start = parse_start_row(&write.range)
                .ok_or_else(|| Error::Ledger(format!("range has no start row: {}", write.range)))?;
            for (i, value) in write.values.iter().enumerate() {
                let index = start - 1 + i;
                while rows.len() <= index {
                    rows.push(Self::blank_row());
                }
                rows[index] = value.clone();
            }
        }
        self.store(&rows)?;
        Ok(writes.len())
    }

    fn insert_rows(&self, at_index: usize, count: usize) -> Result<()> {
        let mut rows = self.load()?;
        let at = at_index.min(rows.len());
        rows.splice(at..at, std::iter::repeat(Self::blank_row()).take(count));
        self.store(&rows)
    }
}
