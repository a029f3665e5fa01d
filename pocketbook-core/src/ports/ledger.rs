//! Ledger store port
//!
//! Defines the interface to the external tabular ledger the exporter
//! reconciles into. The real spreadsheet client lives outside the core;
//! the CSV and in-memory adapters implement this trait locally.
//!
//! Ranges use A1 notation without a sheet prefix (`ensure_sheet` pins the
//! sheet). Columns are fixed A..I per `LEDGER_HEADER`; only the row
//! component varies.

use crate::domain::result::Result;

/// One row of ledger cells, leftmost column first
pub type Row = Vec<String>;

/// A targeted write of one or more rows at a range
#[derive(Debug, Clone)]
pub struct RangeWrite {
    pub range: String,
    pub values: Vec<Row>,
}

/// Tabular ledger abstraction
pub trait LedgerStore: Send + Sync {
    /// Make sure the ledger sheet exists and carries the given header row.
    /// Fails with a configuration error when the store is unreachable or
    /// not configured; callers rely on this to fail fast before any write.
    fn ensure_sheet(&self, header: &[&str]) -> Result<()>;

    /// Read all rows covered by the range, header included.
    /// Rows may be ragged (shorter than the full column count).
    fn read_range(&self, range: &str) -> Result<Vec<Row>>;

    /// Overwrite rows starting at the range's first cell
    fn write_range(&self, range: &str, rows: &[Row]) -> Result<()>;

    /// Apply several targeted writes in one call; returns the number applied
    fn batch_update(&self, writes: &[RangeWrite]) -> Result<usize>;

    /// Shift existing rows down, opening `count` blank rows at the
    /// 1-indexed row `at_index` (0 = before the header, 1 = right after it)
    fn insert_rows(&self, at_index: usize, count: usize) -> Result<()>;
}

/// Range covering the whole sheet
pub const FULL_RANGE: &str = "A:I";

/// A1 range for a single 1-indexed sheet row
pub fn row_range(row: usize) -> String {
    format!("A{row}:I{row}")
}

/// Extract the 1-indexed start row of an A1 range.
/// Returns None for unbounded ranges like "A:I"; rows are 1-based, so a
/// literal row 0 is rejected too.
pub fn parse_start_row(range: &str) -> Option<usize> {
    let digits: String = range
        .chars()
        .skip_while(|c| c.is_ascii_alphabetic())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|&row| row > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_range_round_trips() {
        assert_eq!(row_range(5), "A5:I5");
        assert_eq!(parse_start_row(&row_range(5)), Some(5));
    }

    #[test]
    fn test_parse_start_row() {
        assert_eq!(parse_start_row("A2"), Some(2));
        assert_eq!(parse_start_row("A10:I10"), Some(10));
        assert_eq!(parse_start_row(FULL_RANGE), None);
    }
}
