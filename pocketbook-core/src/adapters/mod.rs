//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Demo data source for testing and demo mode
//! - Local CSV file for the LedgerStore port
//! - In-memory ledger for integration tests

pub mod csv_ledger;
pub mod demo;
pub mod memory_ledger;

pub use csv_ledger::CsvLedger;
pub use demo::DemoSource;
pub use memory_ledger::MemoryLedger;
