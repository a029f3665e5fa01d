//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

pub mod ledger;
mod source;

pub use ledger::{LedgerStore, RangeWrite, Row};
pub use source::TransactionSource;
